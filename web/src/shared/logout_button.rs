use yew::prelude::*;

use crate::hooks::use_logout;

#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let logout = use_logout();

    let onclick = move |_| {
        logout.logout();
    };

    html! {
        <div class="logout" {onclick}>{ "Bye" }</div>
    }
}
