use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::footer::Footer;
use super::gallery::Gallery;
use super::hero::Hero;
use super::navigation::Navigation;
use super::projects::Projects;
use super::skills::Skills;
use super::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Experience />
                <Gallery />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
