use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::SessionUser;

/// Initial shown when the provider has no avatar for the user
pub fn initial_of(user: &SessionUser) -> String {
    user.name
        .as_deref()
        .or(user.email.as_deref())
        .and_then(|s| s.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[function_component(ProfileMenu)]
pub fn profile_menu() -> Html {
    let session = use_session_context();
    let open = use_state(|| false);

    let Some(user) = session.status().user().cloned() else {
        return html! {};
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_sign_out = session.sign_out.reform(|_: MouseEvent| ());

    let avatar = match &user.image {
        Some(src) => html! { <img class="avatar" src={src.clone()} alt="Avatar" /> },
        None => html! { <span class="avatar avatar-initial">{initial_of(&user)}</span> },
    };

    html! {
        <div class="dropdown">
            <button class="profile-button" onclick={toggle}>{avatar}</button>
            if *open {
                <div class="dropdown-menu dropdown-menu-right">
                    <div class="dropdown-header">
                        if let Some(name) = user.name.clone() {
                            <p class="profile-name">{name}</p>
                        }
                        if let Some(email) = user.email.clone() {
                            <p class="profile-email">{email}</p>
                        }
                    </div>
                    <button class="dropdown-item" onclick={on_sign_out}>{"Sign out"}</button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: Option<&str>) -> SessionUser {
        SessionUser {
            id: "u1".to_string(),
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            image: None,
            stripe_subscription_status: None,
        }
    }

    #[test]
    fn initial_prefers_name_then_email() {
        assert_eq!(initial_of(&user(Some("ada"), Some("x@y.z"))), "A");
        assert_eq!(initial_of(&user(None, Some("grace@navy.mil"))), "G");
        assert_eq!(initial_of(&user(None, None)), "?");
    }
}
