use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bazaar_core::DomainError;

/// Names of the machine-learning models the demo knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "alexnet",
            ModelName::Resnet => "resnet",
            ModelName::Lenet => "lenet",
        }
    }

    /// Fixed blurb shown for each model.
    pub fn tagline(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

impl FromStr for ModelName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alexnet" => Ok(ModelName::Alexnet),
            "resnet" => Ok(ModelName::Resnet),
            "lenet" => Ok(ModelName::Lenet),
            _ => Err(DomainError::field(
                "model_name",
                "must be one of: alexnet, resnet, lenet",
            )),
        }
    }
}
