mod about;
mod contact;
mod experience;
mod footer;
mod gallery;
mod hero;
mod homepage;
mod loading;
mod motion;
mod navigation;
mod projects;
mod skills;
mod terminal;
mod testimonials;
mod ticker;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SiteConfig, OWNER};
use homepage::HomePage;
use loading::LoadingScreen;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // components fall back to the mail client and offline quotes without it
    match SiteConfig::load() {
        Ok(config) => provide_context(config),
        Err(err) => log::error!("site config unavailable: {err}"),
    }

    let (loaded, set_loaded) = signal(false);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta
            name="description"
            content="AI Developer & Technical Consultant building predictive models and modern web apps."
        />

        <Router>
            <Show
                when=move || loaded.get()
                fallback=move || view! { <LoadingScreen on_done=set_loaded /> }
            >
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Show>
        </Router>
    }
}
