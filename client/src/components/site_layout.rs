//! Page frame shared by every route: header, content, footer.

use leptos::prelude::*;

use super::footer::Footer;
use super::navbar::Navbar;

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="site__main">{children()}</main>
            <Footer/>
        </div>
    }
}
