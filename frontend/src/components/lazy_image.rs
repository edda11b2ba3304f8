use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::components::observer::VisibilityObserver;
use crate::media::lazy_image::{self, LazyAction, LazySource};

impl Reducible for LazySource {
    type Action = LazyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// 1-based number shown on the fallback graphic.
    pub number: usize,
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let source = {
        let number = props.number;
        let src = props.src.to_string();
        use_reducer(move || LazySource::new(number, src))
    };
    let node = use_node_ref();

    // The observer lives only while the source is pending; revealing the
    // image drops it.
    {
        let node = node.clone();
        let dispatcher = source.dispatcher();
        use_effect_with_deps(
            move |pending: &bool| {
                let observer = if *pending {
                    node.cast::<Element>().and_then(|element| {
                        VisibilityObserver::watch(
                            &element,
                            lazy_image::THRESHOLD,
                            Some(lazy_image::ROOT_MARGIN),
                            move |visible| {
                                if visible {
                                    dispatcher.dispatch(LazyAction::Reveal);
                                }
                            },
                        )
                        .map_err(|e| log::warn!("image observer unavailable: {:?}", e))
                        .ok()
                    })
                } else {
                    None
                };
                move || drop(observer)
            },
            source.is_pending(),
        );
    }

    let onload = {
        let source = source.clone();
        Callback::from(move |_: Event| source.dispatch(LazyAction::Loaded))
    };
    let onerror = {
        let source = source.clone();
        Callback::from(move |_: Event| source.dispatch(LazyAction::Failed))
    };

    html! {
        <img
            ref={node}
            class={classes!(source.is_loading().then_some("skeleton"))}
            src={source.src().map(str::to_owned)}
            data-src={source.data_src().map(str::to_owned)}
            alt={props.alt.clone()}
            width={lazy_image::IMAGE_WIDTH.to_string()}
            height={lazy_image::IMAGE_HEIGHT.to_string()}
            loading="lazy"
            {onload}
            {onerror}
        />
    }
}
