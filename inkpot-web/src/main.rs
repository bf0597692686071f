use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

mod api;
mod article;
mod comments;
mod content;
mod login;

use article::ArticlePage;
use content::ArticleList;
use login::Login;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

const KEY_LOGIN: &str = "login";

/// Session persisted in LocalStorage: the provider-issued token plus the
/// email it was issued for.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LoginInfo {
    pub token: String,
    pub email: String,
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}

pub fn navigate_to(path: &str) {
    web_sys::window()
        .expect("no window")
        .location()
        .set_href(path)
        .expect("failed navigating");
}

enum Route {
    Home,
    Article(String),
    Login,
}

// the server answers every non-API path with the app shell, so a plain
// look at the path is all the routing there is
fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| String::from("/"));
    match path.strip_prefix("/articles/") {
        Some(name) if !name.is_empty() => Route::Article(String::from(name)),
        _ if path == "/login" => Route::Login,
        _ => Route::Home,
    }
}

enum AppMsg {
    UserLogin(LoginInfo),
    UserLogout,
}

struct App {
    login: Option<LoginInfo>,
    route: Route,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            login: LocalStorage::get(KEY_LOGIN).ok(),
            route: current_route(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::UserLogin(info) => {
                LocalStorage::set(KEY_LOGIN, &info)
                    .expect("failed saving login info to LocalStorage");
                self.login = Some(info);
                navigate_to("/");
            }
            AppMsg::UserLogout => {
                LocalStorage::delete(KEY_LOGIN);
                self.login = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = match &self.login {
            Some(login) => html! {
                <>
                    <span class="nav-user">{ &login.email }</span>
                    <button
                        class="logout-btn"
                        onclick={ctx.link().callback(|_| AppMsg::UserLogout)}
                    >
                        { "Log out" }
                    </button>
                </>
            },
            None => html! { <a class="signin-link" href="/login">{ "Log in" }</a> },
        };
        let body = match &self.route {
            Route::Home => html! { <ArticleList /> },
            Route::Article(name) => html! {
                <ArticlePage name={name.clone()} login={self.login.clone()} />
            },
            Route::Login => html! {
                <Login on_submit={ctx.link().callback(AppMsg::UserLogin)} />
            },
        };
        html! {
            <>
                <nav id="top-nav">
                    <a id="site-title" href="/">{ "inkpot" }</a>
                    { session }
                </nav>
                <div class="container">{ body }</div>
            </>
        }
    }
}
