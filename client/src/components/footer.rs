//! Footer with copyright line and social links.

use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, INSTAGRAM_URL, TIKTOK_URL, mailto_href};
use crate::util::calendar::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer id="contact" class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">{format!("PRO&PRO © {year}")}</div>
                <div class="site-footer__links">
                    <SocialLink href=INSTAGRAM_URL icon="\u{25ce}" label="Instagram" external=true/>
                    <SocialLink href=TIKTOK_URL icon="\u{266b}" label="TikTok" external=true/>
                    <SocialLink href=mailto_href() icon="\u{2709}" label=CONTACT_EMAIL/>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLink(
    #[prop(into)] href: String,
    icon: &'static str,
    label: &'static str,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    let target = external.then_some("_blank");
    let rel = external.then_some("noopener noreferrer");

    view! {
        <a href=href target=target rel=rel class="site-footer__link">
            <span class="site-footer__icon" aria-hidden="true">{icon}</span>
            <span class="site-footer__label">{label}</span>
        </a>
    }
}
