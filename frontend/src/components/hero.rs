use yew::prelude::*;
use yew_hooks::prelude::*;
use crate::content::PageContent;

const WORD_INTERVAL_MS: u32 = 2600;

pub fn next_word(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub page: &'static PageContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let page = props.page;
    let current_word = use_state(|| 0usize);

    {
        let current_word = current_word.clone();
        use_interval(
            move || current_word.set(next_word(*current_word, page.hero_words.len())),
            WORD_INTERVAL_MS,
        );
    }

    let word = page.hero_words.get(*current_word).copied().unwrap_or_default();

    html! {
        <header class="hero" style={format!("--accent: {};", page.accent)}>
            <div class="hero-background" style={format!("background-image: url('{}');", page.hero_image)}></div>
            <div class="hero-content">
                <p class="hero-kicker">{page.hero_kicker}</p>
                <h1>
                    {page.hero_title}{" "}
                    <span class="hero-word" key={word}>{word}</span>
                </h1>
                <p class="hero-subtitle">{page.hero_text}</p>
                <div class="hero-cta-group">
                    <a href="#servicos" class="hero-cta">{"Conheça os serviços"}</a>
                    <a href="#contato" class="hero-link">{"Agendar uma conversa"}</a>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_cycle() {
        assert_eq!(next_word(0, 3), 1);
        assert_eq!(next_word(2, 3), 0);
        assert_eq!(next_word(0, 1), 0);
        assert_eq!(next_word(5, 0), 0);
    }
}
