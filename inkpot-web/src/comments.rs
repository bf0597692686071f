use inkpot_api::{Article, Comment, NewComment};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{api, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub article_name: String,
    pub comments: Vec<Comment>,
    pub login: Option<LoginInfo>,
    /// Fired with the server's updated article after a comment lands.
    pub on_article_update: Callback<Article>,
}

pub enum CommentMsg {
    EmailChanged(String),
    TextChanged(String),
    SubmitClicked,
    Submitted(Article),
}

pub struct CommentList {
    email: String,
    text: String,
}

impl Component for CommentList {
    type Message = CommentMsg;
    type Properties = CommentListProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentList {
            email: ctx
                .props()
                .login
                .as_ref()
                .map(|login| login.email.clone())
                .unwrap_or_default(),
            text: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentMsg::EmailChanged(email) => self.email = email,
            CommentMsg::TextChanged(text) => self.text = text,
            CommentMsg::SubmitClicked => {
                if self.text.is_empty() {
                    return false;
                }
                let Some(login) = ctx.props().login.clone() else {
                    return false;
                };
                let name = ctx.props().article_name.clone();
                let body = NewComment {
                    email: self.email.clone(),
                    comment: self.text.clone(),
                };
                ctx.link().send_future(async move {
                    CommentMsg::Submitted(api::post_comment(&name, &login.token, &body).await)
                });
                return false;
            }
            CommentMsg::Submitted(article) => {
                self.text.clear();
                ctx.props().on_article_update.emit(article);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let form = match &ctx.props().login {
            None => html! {
                <p>
                    <a href="/login">{ "Log in" }</a>
                    { " to join the discussion." }
                </p>
            },
            Some(_) => {
                let on_email_change = ctx.link().callback(|e: web_sys::Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    CommentMsg::EmailChanged(input.value())
                });
                let on_text_change = ctx.link().callback(|e: web_sys::Event| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    CommentMsg::TextChanged(input.value())
                });
                html! {
                    <div class="add-comment">
                        <input
                            placeholder="Your email"
                            value={self.email.clone()}
                            onchange={on_email_change}
                        />
                        <textarea
                            placeholder="Add a comment"
                            value={self.text.clone()}
                            onchange={on_text_change}
                        />
                        <button onclick={ctx.link().callback(|_| CommentMsg::SubmitClicked)}>
                            { "Post comment" }
                        </button>
                    </div>
                }
            }
        };
        html! {
            <div class="comment-section">
                <h3>{ "Comments" }</h3>
                { form }
                { for ctx.props().comments.iter().map(|comment| html! {
                    <div class="comment">
                        <h4>{ &comment.username }</h4>
                        <p>{ &comment.comment }</p>
                    </div>
                }) }
            </div>
        }
    }
}
