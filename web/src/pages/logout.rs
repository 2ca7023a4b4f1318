use session::Activation;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::hooks::use_logout;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct Props {
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}

/// Logs out as soon as it's mounted, once.
#[function_component(Logout)]
pub fn logout_page(props: &Props) -> Html {
    let logout = use_logout();
    let activation = use_memo(|_| Activation::new(), ());

    use_mount(move || {
        activation.run(|| {
            logout.logout();
        });
    });

    html! {
        <div class="logout-page">
            if let Some(heading) = &props.heading {
                <h2>{ heading.clone() }</h2>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use session::{LogoutConfig, MemoryStore, RecordingNavigator};
    use wasm_bindgen_test::*;

    use super::*;
    use crate::hooks::SessionServices;
    use crate::shared::SessionProvider;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, Clone, PartialEq)]
    struct HarnessProps {
        services: SessionServices,
        heading: Option<AttrValue>,
        rerenders: u32,
    }

    /// Mounts the page and then re-renders it `rerenders` times.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let renders = use_state(|| 0u32);

        {
            let renders = renders.clone();
            let limit = props.rerenders;
            use_effect(move || {
                if *renders < limit {
                    renders.set(*renders + 1);
                }
                || ()
            });
        }

        let heading = props
            .heading
            .as_ref()
            .map(|heading| AttrValue::from(format!("{} {}", heading, *renders)));

        html! {
            <SessionProvider services={props.services.clone()}>
                <Logout {heading} />
            </SessionProvider>
        }
    }

    async fn render(props: HarnessProps) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let root = document.create_element("div").expect("create root");
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append root");

        yew::Renderer::<Harness>::with_root_and_props(root.clone(), props).render();

        TimeoutFuture::new(100).await;

        root
    }

    #[wasm_bindgen_test]
    async fn it_logs_out_once_across_rerenders() {
        let store = MemoryStore::with([("Authorization", "abc123")]);
        let navigator = RecordingNavigator::new();
        let services =
            SessionServices::new(store.clone(), navigator.clone(), LogoutConfig::default());

        let root = render(HarnessProps {
            services,
            heading: Some(AttrValue::from("Bye")),
            rerenders: 3,
        })
        .await;

        assert!(root.inner_html().contains("<h2>Bye 3</h2>"));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.removals(), 1);
        assert_eq!(navigator.visited(), vec!["/".to_owned()]);
    }

    #[wasm_bindgen_test]
    async fn it_renders_empty_container_when_already_logged_out() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let services =
            SessionServices::new(store.clone(), navigator.clone(), LogoutConfig::default());

        let root = render(HarnessProps {
            services,
            heading: None,
            rerenders: 0,
        })
        .await;

        let html = root.inner_html();
        assert!(html.contains(r#"class="logout-page""#));
        assert!(!html.contains("<h2"));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.removals(), 1);
        assert_eq!(navigator.location(), Some("/".to_owned()));
    }
}
