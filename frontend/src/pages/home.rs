use yew::prelude::*;

use crate::carousel::cards::TrackKind;
use crate::carousel::viewport::ReadingDirection;
use crate::components::card_carousel::CardCarousel;
use crate::components::hero_video::HeroVideoLoader;
use crate::components::review_carousel::ReviewCarouselView;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page" dir="rtl">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"المنصة التعليمية لتحفيظ القرآن الكريم"}</h1>
                    <p class="hero-subtitle">
                        {"حلقات تحفيظ وتجويد عن بعد مع معلمات مجازات، بمواعيد تناسبك."}
                    </p>
                </div>
                <HeroVideoLoader />
            </header>

            { for TrackKind::ALL.into_iter().map(|kind| html! {
                <CardCarousel key={kind.name()} {kind} />
            }) }

            <ReviewCarouselView direction={ReadingDirection::Rtl} />
        </main>
    }
}
