use yew::prelude::*;

use crate::models::BillingCycle;

#[derive(Properties, PartialEq)]
pub struct BillingToggleProps {
    pub cycle: BillingCycle,
    pub on_toggle: Callback<()>,
}

#[function_component(BillingToggle)]
pub fn billing_toggle(props: &BillingToggleProps) -> Html {
    let annual = props.cycle == BillingCycle::Annually;

    html! {
        <div class="billing-toggle" onclick={props.on_toggle.reform(|_: MouseEvent| ())}>
            <button class={classes!("billing-option", (!annual).then_some("selected"))}>
                <span>{"Monthly"}</span>
            </button>
            <button class={classes!("billing-option", annual.then_some("selected"))}>
                <span>{"Annually"}</span>
                <span class="billing-discount">{"-20%"}</span>
            </button>
        </div>
    }
}
