use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::date_utils::current_year;
use crate::shared::i18n::{tr, use_locale};
use crate::shared::icons::icon;

pub const CONTACT_ADDRESS: &str = "Ngong Road, Nairobi, Kenya";
pub const CONTACT_PHONE: &str = "+254 712 345 678";
pub const CONTACT_EMAIL: &str = "support@hagagandi.com";

/// Footer wording differs from the navbar for two of the links
fn quick_link_key(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Book => "footerBook",
        AppRoute::Admin => "footerAdmin",
        other => other.label_key(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <h2 class="footer__brand">"HagaGandi"</h2>
                    <p>{tr("footerBlurb")}</p>
                </div>

                <div class="footer__links">
                    <h3>{tr("quickLinks")}</h3>
                    <ul>
                        {AppRoute::all().into_iter().map(|route| view! {
                            <li>
                                <A href=route.path()>{move || locale.t(quick_link_key(route))}</A>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer__contact">
                    <h3>{tr("contactTitle")}</h3>
                    <p>{icon("map-pin")} {CONTACT_ADDRESS}</p>
                    <p>{icon("phone")} <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', ""))>{CONTACT_PHONE}</a></p>
                    <p>{icon("mail")} <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a></p>
                </div>
            </div>

            <div class="footer__bottom">
                {move || format!("© {} HagaGandi. {}", year, locale.t("rightsReserved"))}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_link_wording() {
        assert_eq!(quick_link_key(AppRoute::Home), "navHome");
        assert_eq!(quick_link_key(AppRoute::Book), "footerBook");
        assert_eq!(quick_link_key(AppRoute::Dashboard), "navDashboard");
        assert_eq!(quick_link_key(AppRoute::Admin), "footerAdmin");
    }
}
