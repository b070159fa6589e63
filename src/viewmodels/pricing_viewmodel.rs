use std::collections::BTreeSet;

use url::Url;

use crate::models::{BillingCycle, Faq, Plan, PlanFeature};
use crate::services::ApiClient;
use crate::services::ApiError;

pub const CHECKOUT_PATH: &str = "/api/stripe/checkout";

pub fn plans() -> Vec<Plan> {
    vec![Plan {
        name: "Pro",
        monthly_price: "$10",
        annual_price: "$8",
        features: vec![
            PlanFeature {
                feature: "Unlimited recordings",
                description: "Make and store unlimited recordings of your tab, desktop, and any application.",
                included: true,
            },
            PlanFeature {
                feature: "Video download",
                description: "Download your recorded videos for offline viewing or sharing with others.",
                included: true,
            },
            PlanFeature {
                feature: "External video upload",
                description: "Upload videos recorded using other tools or platforms to your Chitram library.",
                included: true,
            },
        ],
    }]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "What are my payment options?",
            answer: "You can be billed monthly, but save 20% if you pay annually. We currently accept credit card payment. Contact us for alternative payment methods.",
        },
        Faq {
            question: "Can I import videos I already recorded?",
            answer: "Yes! Chitram allows you to import your existing videos.",
        },
        Faq {
            question: "How do I contact Support?",
            answer: "If you need to contact our Support, click the menu on the bottom right to start a chat.",
        },
    ]
}

pub fn billing_note(cycle: BillingCycle) -> &'static str {
    match cycle {
        BillingCycle::Monthly => "billed monthly",
        BillingCycle::Annually => "billed annually",
    }
}

/// Flips one FAQ entry open or closed; the others keep their state
pub fn toggle_faq(open: &BTreeSet<usize>, index: usize) -> BTreeSet<usize> {
    let mut next = open.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next
}

/// Checkout entry point on the backend; it redirects to the payment provider
pub fn checkout_url(client: &ApiClient, cycle: BillingCycle) -> Result<String, ApiError> {
    let mut url = Url::parse(&client.url(CHECKOUT_PATH)).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("billing", cycle.as_str());
    Ok(url.into())
}
