use serde::Serialize;

use crate::pricing::Money;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Jumele,
    Detache,
}

impl PropertyType {
    pub fn code(self) -> &'static str {
        match self {
            PropertyType::Jumele => "jumele",
            PropertyType::Detache => "detache",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Jumele => "Maison de Ville / Jumelé",
            PropertyType::Detache => "Maison Détachée",
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServicePlan {
    #[serde(rename = "tonte")]
    Mowing,
    #[serde(rename = "tonte_feuilles")]
    MowingAndLeaves,
    #[serde(rename = "feuilles_only")]
    LeavesOnly,
}

impl ServicePlan {
    pub const ALL: [ServicePlan; 3] = [
        ServicePlan::Mowing,
        ServicePlan::MowingAndLeaves,
        ServicePlan::LeavesOnly,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ServicePlan::Mowing => "tonte",
            ServicePlan::MowingAndLeaves => "tonte_feuilles",
            ServicePlan::LeavesOnly => "feuilles_only",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServicePlan::Mowing => "Entretien régulier",
            ServicePlan::MowingAndLeaves => "Entretien régulier + Nettoyage des feuilles",
            ServicePlan::LeavesOnly => "Ramassage de feuilles seulement",
        }
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            ServicePlan::Mowing => Some("Inclut : Tonte, Bordures, Soufflage"),
            ServicePlan::MowingAndLeaves => None,
            ServicePlan::LeavesOnly => Some("Forfait saisonnier"),
        }
    }

    /// Plan booked from a tier card, depending on the leaf add-on checkbox.
    pub fn for_add_on(with_leaves: bool) -> Self {
        if with_leaves {
            ServicePlan::MowingAndLeaves
        } else {
            ServicePlan::Mowing
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceTier {
    pub id: PropertyType,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub monthly_price: Money,
    pub billing_months: u32,
    pub leaf_option_price: Money,
    /// Standalone fall leaf pickup, paid upfront for the season.
    pub leaves_only_price: Money,
    pub features: &'static [&'static str],
}

const TIER_FEATURES: &[&str] = &[
    "Tonte hebdomadaire (Mai - Oct)",
    "Coupe bordures (Trim) soignée",
    "Soufflage des résidus (Driveway/Walkway)",
];

pub static PRICING_TIERS: [ServiceTier; 2] = [
    ServiceTier {
        id: PropertyType::Jumele,
        title: "Maison de Ville / Jumelé",
        subtitle: "Terrain standard urbain",
        monthly_price: Money::from_dollars(175),
        billing_months: 6,
        leaf_option_price: Money::from_dollars(40),
        leaves_only_price: Money::from_dollars(275),
        features: TIER_FEATURES,
    },
    ServiceTier {
        id: PropertyType::Detache,
        title: "Maison Détachée",
        subtitle: "Terrain standard banlieue",
        monthly_price: Money::from_dollars(195),
        billing_months: 6,
        leaf_option_price: Money::from_dollars(50),
        leaves_only_price: Money::from_dollars(350),
        features: TIER_FEATURES,
    },
];

pub fn tier(id: PropertyType) -> &'static ServiceTier {
    match id {
        PropertyType::Jumele => &PRICING_TIERS[0],
        PropertyType::Detache => &PRICING_TIERS[1],
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferralContact {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ReferralContact {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.address, &self.phone, &self.email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub property_type: PropertyType,
    pub service_plan: ServicePlan,
    pub referral_opt_in: bool,
    pub referral: ReferralContact,
    pub comment: String,
}

impl BookingRequest {
    pub fn new(property_type: PropertyType, service_plan: ServicePlan) -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            property_type,
            service_plan,
            referral_opt_in: false,
            referral: ReferralContact::default(),
            comment: String::new(),
        }
    }
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self::new(PropertyType::Jumele, ServicePlan::Mowing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ids_are_unique_and_resolve_to_themselves() {
        assert_ne!(PRICING_TIERS[0].id, PRICING_TIERS[1].id);
        for t in &PRICING_TIERS {
            assert_eq!(tier(t.id), t);
        }
    }

    #[test]
    fn wire_codes_match_serde_names() {
        for plan in ServicePlan::ALL {
            let json = serde_json::to_string(&plan).unwrap();
            assert_eq!(json, format!("\"{}\"", plan.code()));
        }
        let json = serde_json::to_string(&PropertyType::Detache).unwrap();
        assert_eq!(json, "\"detache\"");
    }

    #[test]
    fn referral_with_blank_field_is_incomplete() {
        let mut referral = ReferralContact {
            name: "Marie Gagnon".into(),
            address: "12 Rue des Pins".into(),
            phone: "(418) 555-0199".into(),
            email: "marie@example.com".into(),
        };
        assert!(referral.is_complete());
        referral.email = "   ".into();
        assert!(!referral.is_complete());
    }
}
