#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub sku_header: String,
    pub variation_attribute: String,
    pub theme_name: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            sku_header: "SKU".to_string(),
            variation_attribute: "Size".to_string(),
            theme_name: "SizeName".to_string(),
        }
    }
}
