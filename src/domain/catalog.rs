use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identifier of a priced option, e.g. `package_basic` or `hosting_5gb`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category implied by the key prefix, if any.
    pub fn kind(&self) -> Option<OptionKind> {
        OptionKind::ALL
            .into_iter()
            .find(|kind| self.0.starts_with(kind.prefix()))
    }
}

impl From<&str> for OptionKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for OptionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Package,
    Addon,
    Hosting,
    Domain,
}

impl OptionKind {
    pub const ALL: [OptionKind; 4] = [
        OptionKind::Package,
        OptionKind::Addon,
        OptionKind::Hosting,
        OptionKind::Domain,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            OptionKind::Package => "package_",
            OptionKind::Addon => "addon_",
            OptionKind::Hosting => "hosting_",
            OptionKind::Domain => "domain_",
        }
    }

    pub fn name(&self) -> &'static str {
        self.prefix().trim_end_matches('_')
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        OptionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| format!("unknown option kind '{s}'"))
    }
}

/// Business sector the site is built for. Decides which add-ons are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Healthcare,
    Construction,
    Spa,
    Retail,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Healthcare,
        Industry::Construction,
        Industry::Spa,
        Industry::Retail,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Construction => "construction",
            Industry::Spa => "spa",
            Industry::Retail => "retail",
        }
    }

    /// Add-on keys offered for this industry.
    pub fn addons(&self) -> &'static [&'static str] {
        match self {
            Industry::Healthcare => &[
                "addon_doctor_lookup",
                "addon_rating_system",
                "addon_bmi_calculator",
                "addon_advanced_api",
            ],
            Industry::Construction => &["addon_project_portfolio", "addon_estimation_tool"],
            Industry::Spa => &["addon_booking_spa", "addon_gallery_before_after"],
            Industry::Retail => &["addon_ecommerce", "addon_inventory_management"],
        }
    }

    pub fn offers(&self, addon: &str) -> bool {
        self.addons().contains(&addon)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Industry::ALL
            .into_iter()
            .find(|industry| industry.name() == wanted)
            .ok_or_else(|| format!("unknown industry '{s}'"))
    }
}
