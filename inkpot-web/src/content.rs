use yew::prelude::*;

/// The immutable half of an article: title and body ship with the bundle,
/// only the engagement state lives server side.
pub struct StaticArticle {
    pub name: &'static str,
    pub title: &'static str,
    pub content: &'static [&'static str],
}

pub static ARTICLES: &[StaticArticle] = &[
    StaticArticle {
        name: "learn-react",
        title: "The Fastest Way to Learn React",
        content: &[
            "Most React tutorials start with a wall of build tooling. Skip it: \
             open a sandbox, write one component, and render it. Everything else \
             in React is a variation on that first component.",
            "Components are functions from props to markup. Once that clicks, \
             hooks stop looking like magic: useState is a variable the runtime \
             remembers for you, useEffect is a callback it runs after rendering.",
            "The fastest learners build the same small app three times: once \
             following a guide, once from memory, once with a twist of their \
             own. Repetition beats novelty while the fundamentals settle.",
        ],
    },
    StaticArticle {
        name: "learn-node",
        title: "How to Build a Server with Node",
        content: &[
            "A web server is a function that takes a request and returns a \
             response. Node's http module gives you exactly that and nothing \
             more, which makes it the best place to start.",
            "Frameworks earn their keep once routes multiply. Until then, \
             reading the raw request object teaches you what every framework is \
             actually doing under its decorators and middleware stacks.",
            "When you do reach for a framework, keep the handlers thin. \
             Business logic that lives outside the route table is logic you can \
             test without booting a listener.",
        ],
    },
    StaticArticle {
        name: "mongodb",
        title: "Learn MongoDB in Five Minutes",
        content: &[
            "A document database stores what you would otherwise serialize: \
             whole records, nested and ready to use. No joins, no mapping layer, \
             just the shape your code already has.",
            "The two operations you will use constantly are findOne and \
             updateOne. Filters are documents too, which is why the query \
             language feels like writing down the record you wish existed.",
            "Atomic update operators are the part worth memorizing. An $inc \
             plus a $push in a single update is a transaction you never had to \
             open.",
        ],
    },
];

pub fn find(name: &str) -> Option<&'static StaticArticle> {
    ARTICLES.iter().find(|article| article.name == name)
}

#[function_component(ArticleList)]
pub fn article_list() -> Html {
    html! {
        <>
            <h1>{ "Articles" }</h1>
            { for ARTICLES.iter().map(|article| html! {
                <div class="article-list-item">
                    <a href={format!("/articles/{}", article.name)}>
                        <h3>{ article.title }</h3>
                    </a>
                    <p>{ article.content[0] }</p>
                </div>
            }) }
        </>
    }
}
