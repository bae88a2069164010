use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// BMI band, ordered from the lowest to the highest range.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    FromPrimitive,
    ToPrimitive,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Underweight,
    HealthyWeight,
    Overweight,
    Obesity,
}

impl Category {
    pub fn rank(self) -> u8 {
        self.to_u8().unwrap_or_default()
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        FromPrimitive::from_u8(rank)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::HealthyWeight => "Healthy weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    /// Human readable BMI range, as shown in the category legend.
    pub fn range(self) -> &'static str {
        match self {
            Category::Underweight => "Below 18.5",
            Category::HealthyWeight => "18.5 - 24.9",
            Category::Overweight => "25.0 - 29.9",
            Category::Obesity => "30.0 and above",
        }
    }

    pub fn style_tag(self) -> StyleTag {
        match self {
            Category::Underweight => StyleTag::Blue,
            Category::HealthyWeight => StyleTag::Green,
            Category::Overweight => StyleTag::Yellow,
            Category::Obesity => StyleTag::Red,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation hint paired with a [`Category`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleTag {
    Blue,
    Green,
    Yellow,
    Red,
}

impl StyleTag {
    pub fn css_class(self) -> &'static str {
        match self {
            StyleTag::Blue => "text-blue-400",
            StyleTag::Green => "text-green-400",
            StyleTag::Yellow => "text-yellow-400",
            StyleTag::Red => "text-red-400",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BmiResult {
    value: f64,
    category: Category,
    style_tag: StyleTag,
}

impl BmiResult {
    pub fn new(value: f64, category: Category) -> Self {
        Self {
            value,
            category,
            style_tag: category.style_tag(),
        }
    }

    /// BMI rounded to two decimal places.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn style_tag(&self) -> StyleTag {
        self.style_tag
    }
}
