use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::*;
use crate::shared::SessionProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div id="app">
                    <Switch<Route> render={switch}/>
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}
