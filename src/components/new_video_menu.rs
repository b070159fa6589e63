use yew::prelude::*;

use crate::hooks::{use_record_action, use_upload_action};

/// "New video" dropdown in the library header
#[function_component(NewVideoMenu)]
pub fn new_video_menu() -> Html {
    let open = use_state(|| false);
    let record = use_record_action("new video menu");
    let upload = use_upload_action("new video menu");

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_record = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            record.emit(());
        })
    };

    let on_upload = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            upload.emit(());
        })
    };

    html! {
        <div class="dropdown">
            <button class="btn-primary" onclick={toggle}>{"New video"}</button>
            if *open {
                <div class="dropdown-menu">
                    <button class="dropdown-item" onclick={on_record}>{"🎥 Record a video"}</button>
                    <button class="dropdown-item" onclick={on_upload}>{"⬆️ Upload a video"}</button>
                </div>
            }
        </div>
    }
}
