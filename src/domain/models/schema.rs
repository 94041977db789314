//! The ordered, positional schema of the input file.
//!
//! Slot *n* of [`SCHEMA`] receives the *n*-th value line of the input
//! file. The table is the only place the ordering is written down; the
//! loader, the template writer and the CLI all walk it.

use std::fmt;

use serde::Serialize;

use super::record::ConfigRecord;

/// Number of value lines an input file must contain.
pub const SCHEMA_LEN: usize = 54;

/// Default upper bound on the length of one value, in bytes.
pub const DEFAULT_MAX_FIELD_LEN: usize = 1024;

/// How a slot's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Parsed as a signed integer
    Integer,
    /// Copied verbatim (directory path or file name)
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Setter and getter pair for one record field.
#[derive(Clone, Copy)]
pub enum FieldAccess {
    /// An `i32` field
    Integer {
        /// Store a parsed value
        set: fn(&mut ConfigRecord, i32),
        /// Read the stored value
        get: fn(&ConfigRecord) -> i32,
    },
    /// A `String` field
    Text {
        /// Store a value
        set: fn(&mut ConfigRecord, String),
        /// Read the stored value
        get: fn(&ConfigRecord) -> &str,
    },
}

/// A value read back out of a [`ConfigRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    /// Value of an integer slot
    Integer(i32),
    /// Value of a text slot
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One entry of the schema table.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// 1-based position in the input file
    pub slot: usize,
    /// Field name on [`ConfigRecord`]
    pub name: &'static str,
    /// Short human description
    pub description: &'static str,
    /// How the value is stored
    pub access: FieldAccess,
}

impl FieldSpec {
    /// The value kind of this slot.
    pub const fn kind(&self) -> FieldKind {
        match self.access {
            FieldAccess::Integer { .. } => FieldKind::Integer,
            FieldAccess::Text { .. } => FieldKind::Text,
        }
    }

    /// Read this slot's value from `record`.
    pub fn read<'a>(&self, record: &'a ConfigRecord) -> FieldValue<'a> {
        match self.access {
            FieldAccess::Integer { get, .. } => FieldValue::Integer(get(record)),
            FieldAccess::Text { get, .. } => FieldValue::Text(get(record)),
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("slot", &self.slot)
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

impl Serialize for FieldSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldSpec", 4)?;
        state.serialize_field("slot", &self.slot)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("description", self.description)?;
        state.end()
    }
}

macro_rules! integer_slot {
    ($slot:literal, $field:ident, $description:literal) => {
        FieldSpec {
            slot: $slot,
            name: stringify!($field),
            description: $description,
            access: FieldAccess::Integer {
                set: |record, value| record.$field = value,
                get: |record| record.$field,
            },
        }
    };
}

macro_rules! text_slot {
    ($slot:literal, $field:ident, $description:literal) => {
        FieldSpec {
            slot: $slot,
            name: stringify!($field),
            description: $description,
            access: FieldAccess::Text {
                set: |record, value| record.$field = value,
                get: |record| record.$field.as_str(),
            },
        }
    };
}

/// The input file schema, in file order.
pub static SCHEMA: [FieldSpec; SCHEMA_LEN] = [
    integer_slot!(1, diagnostics, "diagnostics flag (0 = off)"),
    integer_slot!(2, out_year_prod_ha_lr, "output year for production, harvested area and land rent"),
    integer_slot!(3, in_year_sage_crops, "year of the SAGE crop data"),
    integer_slot!(4, out_year_usd, "output year for US dollar values"),
    integer_slot!(5, in_year_lr_usd, "dollar year of the input land rent data"),
    text_slot!(6, inpath, "input directory"),
    text_slot!(7, outpath, "output directory"),
    text_slot!(8, sagepath, "SAGE data directory"),
    text_slot!(9, hydepath, "HYDE data directory"),
    text_slot!(10, lulcpath, "land use/land cover data directory"),
    text_slot!(11, mircapath, "MIRCA data directory"),
    text_slot!(12, wfpath, "water footprint data directory"),
    text_slot!(13, ldsdestpath, "destination directory for LDS outputs"),
    text_slot!(14, mapdestpath, "destination directory for mapping outputs"),
    text_slot!(15, cell_area_fname, "cell area raster"),
    text_slot!(16, land_area_sage_fname, "SAGE land area raster"),
    text_slot!(17, land_area_hyde_fname, "HYDE land area raster"),
    text_slot!(18, aez_new_fname, "new AEZ raster"),
    text_slot!(19, aez_orig_fname, "original AEZ raster"),
    text_slot!(20, potveg_fname, "potential vegetation raster"),
    text_slot!(21, country_fao_fname, "FAO country raster"),
    text_slot!(22, protected_fname, "protected area raster"),
    text_slot!(23, nfert_rast_fname, "nitrogen fertilizer raster"),
    text_slot!(24, cropland_sage_fname, "SAGE cropland raster"),
    text_slot!(25, rent_orig_fname, "original land rent table"),
    text_slot!(26, country87_gtap_fname, "GTAP 87-country list"),
    text_slot!(27, country87map_fao_fname, "GTAP 87-country to FAO mapping"),
    text_slot!(28, country_all_fname, "all-country list"),
    text_slot!(29, aez_new_info_fname, "new AEZ info table"),
    text_slot!(30, countrymap_iso_gcam_region_fname, "ISO country to GCAM region mapping"),
    text_slot!(31, regionlist_gcam_fname, "GCAM region list"),
    text_slot!(32, use_gtap_fname, "GTAP use table"),
    text_slot!(33, lt_sage_fname, "SAGE land type list"),
    text_slot!(34, lu_hyde_fname, "HYDE land use list"),
    text_slot!(35, lulc_fname, "land use/land cover list"),
    text_slot!(36, crop_fname, "crop list"),
    text_slot!(37, production_fao_fname, "FAO production table"),
    text_slot!(38, yield_fao_fname, "FAO yield table"),
    text_slot!(39, harvestarea_fao_fname, "FAO harvested area table"),
    text_slot!(40, prodprice_fao_fname, "FAO producer price table"),
    text_slot!(41, convert_usd_fname, "US dollar conversion table"),
    text_slot!(42, vegc_csv_fname, "vegetation carbon density table"),
    text_slot!(43, soilc_csv_fname, "soil carbon density table"),
    text_slot!(44, lds_logname, "LDS log file"),
    text_slot!(45, harvestarea_fname, "output harvested area table"),
    text_slot!(46, production_fname, "output production table"),
    text_slot!(47, rent_fname, "output land rent table"),
    text_slot!(48, mirca_irr_fname, "output MIRCA irrigated area table"),
    text_slot!(49, mirca_rfd_fname, "output MIRCA rainfed area table"),
    text_slot!(50, land_type_area_fname, "output land type area table"),
    text_slot!(51, refveg_carbon_fname, "output reference vegetation carbon table"),
    text_slot!(52, wf_fname, "output water footprint table"),
    text_slot!(53, iso_map_fname, "output ISO mapping table"),
    text_slot!(54, lt_map_fname, "output land type mapping table"),
];

/// The schema entry for a 1-based slot, if it exists.
pub fn slot(slot: usize) -> Option<&'static FieldSpec> {
    slot.checked_sub(1).and_then(|index| SCHEMA.get(index))
}

/// The schema entry for a field name, if it exists.
pub fn by_name(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
