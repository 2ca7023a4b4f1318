use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_logout;
use crate::routes::Route;
use crate::shared::LogoutButton;

#[function_component(Home)]
pub fn home() -> Html {
    let logout = use_logout();

    html! {
        <div id="home">
            if logout.token().is_some() {
                <div class="signed-in">
                    { "Signed in" }
                    <LogoutButton />
                </div>
            } else {
                <div class="signed-out">{ "Signed out" }</div>
            }
            <Link<Route> to={Route::Logout}>{ "Logout" }</Link<Route>>
        </div>
    }
}
