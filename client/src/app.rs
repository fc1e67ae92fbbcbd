//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the shared [`ApiClient`] from build-time configuration, wires
//! the browser adapters into its middleware hooks, and provides the client
//! plus the auth/notice/ui signals to every route. All routes except `/login`
//! render through [`Protected`], which guards on the signed-in user and wraps
//! the page in the layout shell.

use api::{ApiClient, ApiConfig, Hooks, LoginRequest};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};
use std::sync::Arc;

use crate::components::layout::AppLayout;
use crate::components::notice_tray::NoticeTray;
use crate::net::fetch::FetchTransport;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::{LoginFuture, LoginHandler, LoginPage};
use crate::pages::materials::MaterialListPage;
use crate::pages::menus::{MenuDetailPage, MenuListPage};
use crate::pages::users::UserManagementPage;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeState, SignalNotifier};
use crate::state::ui::UiState;
use crate::util::auth::{HOME_ROUTE, install_home_redirect, install_unauth_redirect};
use crate::util::session::{BrowserNavigator, LocalStorageSession};

/// Build-time configuration, falling back to defaults on malformed values.
pub fn load_config() -> ApiConfig {
    ApiConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build configuration, using defaults: {e}");
        ApiConfig::default()
    })
}

/// The shared client: demo data or the network, behind the same middleware.
pub fn build_client(config: &ApiConfig, notices: RwSignal<NoticeState>) -> ApiClient {
    let hooks = Hooks {
        session: Arc::new(LocalStorageSession),
        notifier: Arc::new(SignalNotifier::new(notices)),
        navigator: Arc::new(BrowserNavigator),
    };
    if config.use_mock_data {
        leptos::logging::log!("serving built-in demo data");
        ApiClient::new(config, api::demo::DemoTransport, hooks)
    } else {
        ApiClient::new(config, FetchTransport, hooks)
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let notices = RwSignal::new(NoticeState::default());
    let client = build_client(&config, notices);
    let auth = RwSignal::new(AuthState::restored(api::session::restore(&client)));
    let ui = RwSignal::new(UiState::load());

    provide_context(config);
    provide_context(client.clone());
    provide_context(auth);
    provide_context(notices);
    provide_context(ui);

    if auth.get_untracked().loading {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = api::session::refresh(&client).await;
            auth.update(|state| state.apply_refresh(result));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = client;
            auth.update(|state| state.loading = false);
        }
    }

    view! {
        <Title text="Menu Management System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_ROUTE/> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <Protected><DashboardPage/></Protected> }/>
                <Route path=StaticSegment("materials") view=|| view! { <Protected><MaterialListPage/></Protected> }/>
                <Route path=StaticSegment("menus") view=|| view! { <Protected><MenuListPage/></Protected> }/>
                <Route
                    path=(StaticSegment("menus"), ParamSegment("id"))
                    view=|| view! { <Protected><MenuDetailPage/></Protected> }
                />
                <Route path=StaticSegment("users") view=|| view! { <Protected><UserManagementPage/></Protected> }/>
            </Routes>
        </Router>
        <NoticeTray/>
    }
}

/// Login route: signs in through the shared client and leaves once a user
/// is present.
#[component]
fn LoginRoute() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_home_redirect(auth, use_navigate());

    let on_login = LoginHandler::new(move |request: LoginRequest| {
        let client = client.clone();
        let pending: LoginFuture = Box::pin(async move {
            let user = api::session::sign_in(&client, &request).await?;
            auth.set(AuthState::signed_in(user));
            Ok(())
        });
        pending
    });

    view! { <LoginPage on_login/> }
}

/// Guard plus layout for signed-in routes.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let on_logout = Callback::new(move |()| {
        api::session::sign_out(&client);
        auth.set(AuthState::default());
    });
    let children = StoredValue::new(children);
    let user = Memo::new(move |_| auth.get().user);

    move || match user.get() {
        Some(user) => {
            view! { <AppLayout user on_logout>{children.with_value(|c| c())}</AppLayout> }.into_any()
        }
        None => view! { <div class="page-loading">"Loading..."</div> }.into_any(),
    }
}
