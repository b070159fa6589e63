use yew::prelude::*;

use crate::utils::constants::{PRIVACY_PATH, TERMS_PATH};

const LEGAL_LINKS: [(&str, &str); 2] = [
    ("Privacy Policy", PRIVACY_PATH),
    ("Terms and Conditions", TERMS_PATH),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <div class="footer-wrapper fade-in">
            <footer class="site-footer">
                <div class="footer-credit fade-in-up">
                    {"© 2023 Chitram by "}
                    <a target="_blank" rel="noopener noreferrer" href="https://marcushof.vercel.app/">{"Marcus Hof"}</a>
                </div>
                <div class="footer-links">
                    { for LEGAL_LINKS.iter().enumerate().map(|(index, (name, link))| html! {
                        <div key={*name} class="fade-in-up" style={format!("animation-delay: {}ms", index * 100)}>
                            <a class="footer-link" href={*link}>{*name}</a>
                        </div>
                    }) }
                </div>
            </footer>
        </div>
    }
}
