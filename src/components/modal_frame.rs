use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Overlay + card + close button shared by every dialog
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let close = props.on_close.clone();
    let close_overlay = props.on_close.clone();

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={Callback::from(move |_| close_overlay.emit(()))}></div>
            <div
                class={classes!("modal-content", props.class.clone())}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    <button class="btn-close" aria-label="Close" onclick={Callback::from(move |_| close.emit(()))}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
