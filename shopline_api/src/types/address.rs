use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A billing or shipping address.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    #[serde_as(as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub address1: String,
    #[serde_as(as = "DefaultOnNull")]
    pub address2: String,
    #[serde_as(as = "DefaultOnNull")]
    pub city: String,
    #[serde_as(as = "DefaultOnNull")]
    pub province: String,
    #[serde_as(as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(as = "DefaultOnNull")]
    pub phone: String,
}

impl Address {
    /// Joins the non-empty address lines, city and country with `, `.
    pub fn one_line(&self) -> String {
        [
            self.address1.as_str(),
            self.address2.as_str(),
            self.city.as_str(),
            self.province.as_str(),
            self.zip.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_skips_blank_parts() {
        let addr = Address {
            address1: "1 Xinyi Rd".into(),
            address2: " ".into(),
            city: "Taipei".into(),
            zip: "110".into(),
            country: "TW".into(),
            ..Default::default()
        };
        assert_eq!(addr.one_line(), "1 Xinyi Rd, Taipei, 110, TW");
        assert_eq!(Address::default().one_line(), "");
    }
}
