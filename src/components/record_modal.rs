use yew::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::hooks::use_modals;
use crate::stores::ModalKind;

#[function_component(RecordModal)]
pub fn record_modal() -> Html {
    let modals = use_modals();

    if !modals.is_open(ModalKind::Record) {
        return html! {};
    }

    let on_close = modals.close.reform(|_| ModalKind::Record);

    html! {
        <ModalFrame title="Record a video" on_close={on_close.clone()}>
            <p class="modal-text">
                {"Pick a screen, window or tab to share. Your recording lands in your library as soon as you stop."}
            </p>
            <ol class="modal-steps">
                <li>{"Choose what to share"}</li>
                <li>{"Allow microphone and camera if you want to be on screen"}</li>
                <li>{"Stop the recording to save it"}</li>
            </ol>
            <div class="modal-actions">
                <button class="btn-secondary" onclick={on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            </div>
        </ModalFrame>
    }
}
