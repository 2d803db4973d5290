use dioxus::prelude::*;
use pagecraft_engine::models::PricingData;

#[component]
pub fn Pricing(data: PricingData) -> Element {
    rsx! {
        div {
            class: "pricing-row",
            if data.plans.is_empty() {
                div { class: "placeholder", "No pricing plans" }
            }
            for (i, plan) in data.plans.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if plan.highlighted { "pricing-plan highlighted" } else { "pricing-plan" },
                    h3 { "{plan.name}" }
                    p {
                        class: "price",
                        "{plan.price}"
                        if !plan.period.is_empty() {
                            span { " / {plan.period}" }
                        }
                    }
                    ul {
                        for (j, feature) in plan.features.iter().enumerate() {
                            li { key: "{j}", "{feature}" }
                        }
                    }
                }
            }
        }
    }
}
