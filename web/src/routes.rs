use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::Home;
use crate::pages::Logout;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/logout")]
    Logout,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(selected_route: Route) -> Html {
    match selected_route {
        Route::Logout => html! { <Logout heading={AttrValue::from("Bye!")} /> },
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <Home /> },
    }
}
