use yew::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::hooks::use_modals;
use crate::stores::ModalKind;

#[function_component(UploadModal)]
pub fn upload_modal() -> Html {
    let modals = use_modals();

    if !modals.is_open(ModalKind::Upload) {
        return html! {};
    }

    let on_close = modals.close.reform(|_| ModalKind::Upload);

    html! {
        <ModalFrame title="Upload a video" on_close={on_close.clone()}>
            <p class="modal-text">
                {"Import a video recorded with another tool. MP4, WebM and MOV files are supported."}
            </p>
            <div class="modal-actions">
                <button class="btn-secondary" onclick={on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            </div>
        </ModalFrame>
    }
}
