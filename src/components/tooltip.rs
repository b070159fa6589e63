use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let visible = use_state(|| false);

    let show = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(true))
    };
    let hide = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div class="tooltip-anchor" onmouseenter={show} onmouseleave={hide}>
            {props.children.clone()}
            if *visible {
                <div class="tooltip" role="tooltip">{props.title.clone()}</div>
            }
        </div>
    }
}
