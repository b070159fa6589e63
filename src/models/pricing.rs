/// Monthly or annual billing; annual is 20% cheaper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annually,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annually,
            BillingCycle::Annually => BillingCycle::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annually => "annual",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanFeature {
    pub feature: &'static str,
    pub description: &'static str,
    pub included: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub annual_price: &'static str,
    pub features: Vec<PlanFeature>,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Annually => self.annual_price,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}
