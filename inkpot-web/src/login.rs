use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{api, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
    pub on_submit: Callback<LoginInfo>,
}

pub enum LoginMsg {
    EmailChanged(String),
    PassChanged(String),
    SubmitClicked,
    SignedIn(LoginInfo),
    SignInFailed(String),
}

pub struct Login {
    email: String,
    pass: String,
    error: Option<String>,
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Login {
            email: String::new(),
            pass: String::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::EmailChanged(email) => self.email = email,
            LoginMsg::PassChanged(pass) => self.pass = pass,
            LoginMsg::SubmitClicked => {
                let email = self.email.clone();
                let pass = self.pass.clone();
                ctx.link().send_future(async move {
                    match api::sign_in(&email, &pass).await {
                        Ok(info) => LoginMsg::SignedIn(info),
                        Err(err) => LoginMsg::SignInFailed(format!("{err:#}")),
                    }
                });
                return false;
            }
            LoginMsg::SignedIn(info) => {
                ctx.props().on_submit.emit(info);
                return false;
            }
            LoginMsg::SignInFailed(err) => self.error = Some(err),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        html! {
            <div class="login-page">
                <h1>{ "Log in" }</h1>
                { for self.error.iter().map(|err| html! { <p class="error">{ err }</p> }) }
                <input
                    placeholder="Email"
                    value={self.email.clone()}
                    onchange={callback_for!(EmailChanged)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={self.pass.clone()}
                    onchange={callback_for!(PassChanged)}
                />
                <button onclick={ctx.link().callback(|_| LoginMsg::SubmitClicked)}>
                    { "Log in" }
                </button>
            </div>
        }
    }
}
