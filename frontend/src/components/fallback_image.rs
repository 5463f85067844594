use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// First letters of up to two words, used on the placeholder block.
pub fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| word.chars().next().map_or(false, char::is_uppercase))
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

/// Image that swaps itself for a placeholder block if it fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class={classes!("image-placeholder", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <span>{initials(&props.alt)}</span>
            </div>
        }
    } else {
        html! {
            <img
                class={props.class.clone()}
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                onerror={onerror}
            />
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_lowercase_particles() {
        assert_eq!(initials("Dra. Helena Prado"), "DH");
        assert_eq!(initials("Marcos Tavares"), "MT");
        assert_eq!(initials("Sala de integração Sensorial"), "SS");
    }

    #[test]
    fn initials_of_empty_text() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("foto"), "");
    }
}
