use inkpot_api::{Article, ArticleView};
use yew::prelude::*;

use crate::{api, comments::CommentList, content, navigate_to, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct ArticlePageProps {
    pub name: String,
    pub login: Option<LoginInfo>,
}

pub enum ArticleMsg {
    Loaded(ArticleView),
    Upvote,
    Updated(Article),
}

/// One article: bundled title and body, merged with the dynamic state
/// (upvotes, comments) fetched from the API.
pub struct ArticlePage {
    info: Article,
    can_upvote: bool,
}

impl Component for ArticlePage {
    type Message = ArticleMsg;
    type Properties = ArticlePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        // no point fetching dynamic state for an article we cannot render
        if content::find(&ctx.props().name).is_some() {
            let name = ctx.props().name.clone();
            let token = ctx.props().login.as_ref().map(|l| l.token.clone());
            ctx.link().send_future(async move {
                ArticleMsg::Loaded(api::fetch_article(&name, token.as_deref()).await)
            });
        }
        ArticlePage {
            info: Article::new(ctx.props().name.clone()),
            can_upvote: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ArticleMsg::Loaded(view) => {
                self.info = view.article;
                self.can_upvote = view.can_upvote;
            }
            ArticleMsg::Upvote => {
                let Some(login) = ctx.props().login.clone() else {
                    return false;
                };
                let name = ctx.props().name.clone();
                ctx.link().send_future(async move {
                    ArticleMsg::Updated(api::upvote_article(&name, &login.token).await)
                });
                return false;
            }
            ArticleMsg::Updated(article) => {
                // the server's copy wins after any mutation
                self.info = article;
                self.can_upvote = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(article) = content::find(&ctx.props().name) else {
            return html! { <NotFound /> };
        };
        let vote_control = match &ctx.props().login {
            Some(_) => html! {
                <button
                    class="upvote-btn"
                    onclick={ctx.link().callback(|_| ArticleMsg::Upvote)}
                >
                    { "Upvote" }
                </button>
            },
            None => html! {
                <button class="signin-btn" onclick={Callback::from(|_| navigate_to("/login"))}>
                    { "Log in to upvote" }
                </button>
            },
        };
        html! {
            <>
                <div id="article-body">
                    <h1>{ article.title }</h1>
                    <p id="upvote-text">{ format!("Upvote(s): {}", self.info.upvotes) }</p>
                    { for article.content.iter().map(|para| html! { <p>{ *para }</p> }) }
                </div>
                <hr />
                { vote_control }
                <CommentList
                    article_name={ctx.props().name.clone()}
                    comments={self.info.comments.clone()}
                    login={ctx.props().login.clone()}
                    on_article_update={ctx.link().callback(ArticleMsg::Updated)}
                />
            </>
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <>
            <h1>{ "404: Article not found" }</h1>
            <p>
                { "There is no article here. Head back to the " }
                <a href="/">{ "article list" }</a>
                { "." }
            </p>
        </>
    }
}
