use serde::{Deserialize, Serialize};

/// Controls whether restocking is automatic (`High`) or manual (`Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductPriority {
    High,
    Low,
}

impl std::fmt::Display for ProductPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductPriority::High => write!(f, "high"),
            ProductPriority::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for ProductPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(ProductPriority::High),
            "low" => Ok(ProductPriority::Low),
            _ => Err(format!("Invalid product priority: {}", s)),
        }
    }
}

/// Volume classification, fixed when the product is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    HighVolume,
    LowVolume,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::HighVolume => write!(f, "high_volume"),
            ProductCategory::LowVolume => write!(f, "low_volume"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high_volume" => Ok(ProductCategory::HighVolume),
            "low_volume" => Ok(ProductCategory::LowVolume),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

/// Stock status reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Ok,
    BelowThreshold,
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Ok => write!(f, "ok"),
            StockStatus::BelowThreshold => write!(f, "below_threshold"),
            StockStatus::OutOfStock => write!(f, "out_of_stock"),
        }
    }
}
