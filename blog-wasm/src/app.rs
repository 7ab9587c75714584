use crate::api::ApiClient;
use blog_core::{Command, FeedController, FormField, Msg, Post};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub struct App {
    feed: FeedController,
    api: ApiClient,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut app = Self {
            feed: FeedController::new(),
            api: ApiClient::new(),
        };

        let commands = app.feed.activate();
        app.run(ctx, commands);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let commands = self.feed.update(msg);
        self.run(ctx, commands);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.feed.view();

        html! {
            <div class="container">
                <div class="hero">
                    <h1>{ "Crypto Blog" }</h1>
                    <h5>{ "Explore the latest in cryptocurrency and blockchain technology" }</h5>
                </div>

                <div class="actions">
                    <button class="primary" onclick={ctx.link().callback(|_| Msg::OpenForm)}>
                        { "Create Post" }
                    </button>
                </div>

                if view.loading {
                    <div class="loading"><div class="spinner"></div></div>
                } else {
                    <div class="post-grid">
                        { for view.posts.iter().map(view_post) }
                    </div>
                }

                if view.form_open {
                    { self.view_modal(ctx) }
                }
            </div>
        }
    }
}

impl App {
    /// Runs store calls in the background; each result comes back as a message.
    fn run(&self, ctx: &Context<Self>, commands: Vec<Command>) {
        for command in commands {
            let api = self.api.clone();
            let link = ctx.link().clone();

            spawn_local(async move {
                let msg = match command {
                    Command::FetchPosts => Msg::PostsLoaded(api.list_posts().await),
                    Command::CreatePost(post) => Msg::PostCreated(api.create_post(&post).await),
                };
                link.send_message(msg);
            });
        }
    }

    fn view_modal(&self, ctx: &Context<Self>) -> Html {
        let form = self.feed.form();

        let on_submit = {
            let draft = form.clone();
            ctx.link().callback(move |e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit(draft.clone())
            })
        };

        let on_title = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EditField(FormField::Title, input.value())
        });
        let on_body = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::EditField(FormField::Body, input.value())
        });
        let on_author = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EditField(FormField::Author, input.value())
        });

        // Клик по подложке закрывает окно, клик внутри - нет
        let on_overlay = ctx.link().callback(|_| Msg::CloseForm);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-overlay" onclick={on_overlay}>
                <div class="modal" onclick={keep_open}>
                    <h2>{ "Create New Post" }</h2>
                    <form onsubmit={on_submit}>
                        <div class="field">
                            <label>{ "Title" }</label>
                            <input
                                type="text"
                                required={true}
                                value={form.title.clone()}
                                oninput={on_title}
                            />
                        </div>
                        <div class="field">
                            <label>{ "Body" }</label>
                            <textarea
                                required={true}
                                value={form.body.clone()}
                                oninput={on_body}
                            />
                        </div>
                        <div class="field">
                            <label>{ "Author" }</label>
                            <input
                                type="text"
                                required={true}
                                value={form.author.clone()}
                                oninput={on_author}
                            />
                        </div>
                        if let Some(error) = self.feed.form_error() {
                            <p class="form-error">{ error.to_string() }</p>
                        }
                        <button type="submit" class="primary">{ "Submit" }</button>
                    </form>
                </div>
            </div>
        }
    }
}

fn view_post(post: &Post) -> Html {
    html! {
        <div class="card" key={post.id}>
            <h2>{ &post.title }</h2>
            <p class="byline">{ post.byline() }</p>
            <p>{ &post.body }</p>
        </div>
    }
}
