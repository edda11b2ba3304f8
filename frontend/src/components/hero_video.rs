use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::media::video::{self, HeroVideo};

#[function_component(HeroVideoLoader)]
pub fn hero_video_loader() -> Html {
    let video = use_state(|| HeroVideo::Placeholder);

    let onclick = {
        let video = video.clone();
        Callback::from(move |_: MouseEvent| {
            if video.accepts_clicks() {
                info!("loading hero video");
                video.set(video.activate());
            }
        })
    };

    let onerror = {
        let video = video.clone();
        Callback::from(move |_: Event| {
            warn!("hero video embed failed to load");
            video.set(video.fail());
        })
    };

    let body = match *video {
        HeroVideo::Placeholder => html! {
            <div class="hero-video-placeholder" id="hero-video-placeholder">
                <span class="play-button" aria-hidden="true">{"▶"}</span>
                <span class="play-label">{"شاهد الفيديو التعريفي"}</span>
            </div>
        },
        HeroVideo::Embedded => html! {
            <iframe
                src={video::embed_url(config::HERO_VIDEO_ID)}
                title={config::HERO_VIDEO_TITLE}
                allow={video::EMBED_ALLOW}
                referrerpolicy={video::EMBED_REFERRER_POLICY}
                allowfullscreen=true
                loading="lazy"
                {onerror}
            />
        },
        HeroVideo::Unavailable => html! {
            <div class="video-unavailable">
                <h3>{"الفيديو غير متاح"}</h3>
                <p>{"ربما يكون هذا الفيديو خاصاً أو محذوفاً."}</p>
            </div>
        },
    };

    html! {
        <div
            class="hero-video-wrapper"
            id="hero-video-wrapper"
            onclick={video.accepts_clicks().then_some(onclick)}
        >
            { body }
        </div>
    }
}
