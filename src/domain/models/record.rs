//! The populated input-argument record.

use serde::{Deserialize, Serialize};

use super::schema::{FieldSpec, FieldValue, SCHEMA};

/// Input arguments for a land data system run.
///
/// Every field maps to one positional slot of the input file; see
/// [`SCHEMA`] for the ordering. A record is only ever handed out fully
/// populated by [`crate::ConfigLoader`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigRecord {
    /// Non-zero enables diagnostic outputs
    pub diagnostics: i32,
    /// Output year for production and harvested area
    pub out_year_prod_ha_lr: i32,
    /// Reference year of the SAGE crop data
    pub in_year_sage_crops: i32,
    /// Output year for US dollar values
    pub out_year_usd: i32,
    /// Dollar year of the land rent input data
    pub in_year_lr_usd: i32,

    // base directories
    /// Directory of the input files
    pub inpath: String,
    /// Directory for the output files
    pub outpath: String,
    /// Directory of the SAGE land type and crop data
    pub sagepath: String,
    /// Directory of the HYDE land use data
    pub hydepath: String,
    /// Directory of the land use/land cover data
    pub lulcpath: String,
    /// Directory of the MIRCA irrigated/rainfed data
    pub mircapath: String,
    /// Directory of the water footprint data
    pub wfpath: String,
    /// Destination directory for the land data system outputs
    pub ldsdestpath: String,
    /// Destination directory for the mapping outputs
    pub mapdestpath: String,

    // rasters
    pub cell_area_fname: String,
    pub land_area_sage_fname: String,
    pub land_area_hyde_fname: String,
    pub aez_new_fname: String,
    pub aez_orig_fname: String,
    pub potveg_fname: String,
    pub country_fao_fname: String,
    pub protected_fname: String,
    pub nfert_rast_fname: String,
    pub cropland_sage_fname: String,
    pub rent_orig_fname: String,

    // country and region mappings
    pub country87_gtap_fname: String,
    pub country87map_fao_fname: String,
    pub country_all_fname: String,
    pub aez_new_info_fname: String,
    pub countrymap_iso_gcam_region_fname: String,
    pub regionlist_gcam_fname: String,

    // land type, land use and crop tables
    pub use_gtap_fname: String,
    pub lt_sage_fname: String,
    pub lu_hyde_fname: String,
    pub lulc_fname: String,
    pub crop_fname: String,
    pub production_fao_fname: String,
    pub yield_fao_fname: String,
    pub harvestarea_fao_fname: String,
    pub prodprice_fao_fname: String,
    pub convert_usd_fname: String,
    pub vegc_csv_fname: String,
    pub soilc_csv_fname: String,

    // outputs
    pub lds_logname: String,
    pub harvestarea_fname: String,
    pub production_fname: String,
    pub rent_fname: String,
    pub mirca_irr_fname: String,
    pub mirca_rfd_fname: String,
    pub land_type_area_fname: String,
    pub refveg_carbon_fname: String,
    pub wf_fname: String,
    pub iso_map_fname: String,
    pub lt_map_fname: String,
}

impl ConfigRecord {
    /// Whether diagnostic outputs were requested.
    pub const fn diagnostics_enabled(&self) -> bool {
        self.diagnostics != 0
    }

    /// Iterate the record's values in slot order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, FieldValue<'_>)> + '_ {
        SCHEMA.iter().map(move |spec| (spec, spec.read(self)))
    }

    /// Look up a single value by its field name.
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        super::schema::by_name(name).map(|spec| spec.read(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = ConfigRecord::default();
        assert_eq!(record.diagnostics, 0);
        assert!(record.inpath.is_empty());
        assert!(!record.diagnostics_enabled());
    }

    #[test]
    fn test_fields_follow_schema_order() {
        let record = ConfigRecord {
            diagnostics: 1,
            inpath: "./indata/".to_string(),
            lt_map_fname: "LDS_land_types.csv".to_string(),
            ..Default::default()
        };

        let fields: Vec<_> = record.fields().collect();
        assert_eq!(fields.len(), 54);
        assert_eq!(fields[0].0.name, "diagnostics");
        assert_eq!(fields[0].1, FieldValue::Integer(1));
        assert_eq!(fields[5].1, FieldValue::Text("./indata/"));
        assert_eq!(fields[53].1, FieldValue::Text("LDS_land_types.csv"));
    }

    #[test]
    fn test_get_by_name() {
        let record = ConfigRecord {
            out_year_usd: 2005,
            ..Default::default()
        };
        assert_eq!(record.get("out_year_usd"), Some(FieldValue::Integer(2005)));
        assert_eq!(record.get("no_such_field"), None);
    }

    #[test]
    fn test_serializes_every_field() {
        let json = serde_json::to_value(ConfigRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 54);
        for spec in &SCHEMA {
            assert!(object.contains_key(spec.name), "missing {}", spec.name);
        }
    }
}
