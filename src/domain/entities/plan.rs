const POSITIONAL_FALLBACK_IDX: usize = 4;
const MISSING_SENTINEL: &str = "MISSING";

// Which branch of the attribute lookup produced a child's variation value.
// Lookup order: named plan column, then field index 4, then the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSource {
    Named(String),
    Positional(String),
    Sentinel,
}

impl AttributeSource {
    pub fn into_value(self) -> String {
        match self {
            AttributeSource::Named(value) | AttributeSource::Positional(value) => value,
            AttributeSource::Sentinel => MISSING_SENTINEL.to_string(),
        }
    }
}

// A validated plan: the first data row is the parent spec, every later row
// is a child spec referencing an existing master SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationPlan {
    pub parent: Vec<String>,
    pub children: Vec<Vec<String>>,
    sku_col: usize,
    attribute_col: Option<usize>,
}

impl VariationPlan {
    pub fn new(
        parent: Vec<String>,
        children: Vec<Vec<String>>,
        sku_col: usize,
        attribute_col: Option<usize>,
    ) -> Self {
        Self {
            parent,
            children,
            sku_col,
            attribute_col,
        }
    }

    pub fn parent_sku(&self) -> String {
        self.spec_sku(&self.parent)
    }

    pub fn child_sku(&self, child: &[String]) -> String {
        self.spec_sku(child)
    }

    fn spec_sku(&self, spec: &[String]) -> String {
        spec.get(self.sku_col)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn attribute_for(&self, child: &[String]) -> AttributeSource {
        if let Some(idx) = self.attribute_col {
            return AttributeSource::Named(child.get(idx).cloned().unwrap_or_default());
        }
        if child.len() > POSITIONAL_FALLBACK_IDX {
            return AttributeSource::Positional(child[POSITIONAL_FALLBACK_IDX].clone());
        }
        AttributeSource::Sentinel
    }
}
