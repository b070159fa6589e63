// ============================================================================
// CARD SWAP - stacked cards, the front one moves to the back every `delay_ms`
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::viewmodels::card_swap_viewmodel::{
    initial_order, rotate, slot_of, slot_transform, CardSwapLayout,
};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("swap-card", props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

#[derive(PartialEq)]
struct StackOrder(Vec<usize>);

impl Reducible for StackOrder {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(StackOrder(rotate(&self.0)))
    }
}

#[derive(Properties, PartialEq)]
pub struct CardSwapProps {
    #[prop_or(30.0)]
    pub card_distance: f64,
    #[prop_or(70.0)]
    pub vertical_distance: f64,
    #[prop_or(5_000)]
    pub delay_ms: u32,
    #[prop_or(1.0)]
    pub skew_amount: f64,
    #[prop_or(false)]
    pub pause_on_hover: bool,
    #[prop_or(500)]
    pub width: u32,
    #[prop_or(400)]
    pub height: u32,
    pub children: Children,
}

#[function_component(CardSwap)]
pub fn card_swap(props: &CardSwapProps) -> Html {
    let count = props.children.len();
    let order = use_reducer(|| StackOrder(initial_order(count)));
    let hovered = use_state(|| false);

    let paused = props.pause_on_hover && *hovered;

    {
        let dispatcher = order.dispatcher();
        use_effect_with((props.delay_ms, paused, count), move |(delay_ms, paused, count)| {
            let interval = (!*paused && *count > 1).then(|| {
                Interval::new(*delay_ms, move || dispatcher.dispatch(()))
            });
            // Dropping the handle cancels the interval
            move || drop(interval)
        });
    }

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let layout = CardSwapLayout {
        card_distance: props.card_distance,
        vertical_distance: props.vertical_distance,
        skew_amount: props.skew_amount,
    };

    html! {
        <div
            class="card-swap"
            style={format!("width: {}px; height: {}px;", props.width, props.height)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            { for props.children.iter().enumerate().map(|(index, child)| {
                let slot = slot_of(&order.0, index).unwrap_or(index);
                let transform = slot_transform(slot, count, layout);
                html! {
                    <div key={index} class="card-swap-slot" style={transform.to_style()}>
                        {child}
                    </div>
                }
            }) }
        </div>
    }
}
