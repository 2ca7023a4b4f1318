//! Session services provider.

use yew::prelude::*;

use crate::hooks::SessionServices;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub services: Option<SessionServices>,
    pub children: Children,
}

/// Session services provider, browser backed unless `services` is given.
#[function_component(SessionProvider)]
pub fn session_provider(props: &Props) -> Html {
    let browser = use_memo(|_| SessionServices::browser(), ());
    let services = props
        .services
        .clone()
        .unwrap_or_else(|| (*browser).clone());

    html! {
        <ContextProvider<SessionServices> context={services}>
            { for props.children.iter() }
        </ContextProvider<SessionServices>>
    }
}
