use gloo_timers::callback::Timeout;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use crate::config;
use crate::content::all_pages;

const NOTICE_MS: u32 = 6000;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Text pre-filled in the WhatsApp link next to the form.
    pub fn whatsapp_text(&self) -> Option<String> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return None;
        }
        match self.name.trim() {
            "" => Some(format!("Olá! Gostaria de saber mais sobre {}.", subject)),
            name => Some(format!("Olá! Sou {} e gostaria de saber mais sobre {}.", name, subject)),
        }
    }
}

/// Contact form. Submissions are only written to the browser console.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactMessage::default);
    let notice = use_state(|| false);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    let update = |apply: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_subject = {
        let set = update(|f, v| f.subject = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match serde_json::to_string(&*form) {
                Ok(json) => {
                    log::info!("Contact form submitted");
                    gloo_console::log!("Contact message:", json);
                }
                Err(err) => log::warn!("Could not serialize contact message: {}", err),
            }
            form.set(ContactMessage::default());
            notice.set(true);

            let notice = notice.clone();
            *notice_timer.borrow_mut() = Some(Timeout::new(NOTICE_MS, move || notice.set(false)));
        })
    };

    let whatsapp = config::whatsapp_link(form.whatsapp_text().as_deref());

    html! {
        <section class="contact-section" id="contato">
            <h2 class="reveal">{"Fale com a gente"}</h2>
            <div class="contact-grid">
                <form class="contact-form reveal" onsubmit={onsubmit}>
                    <label>
                        {"Nome"}
                        <input type="text" value={form.name.clone()} oninput={on_name} />
                    </label>
                    <label>
                        {"E-mail"}
                        <input type="email" value={form.email.clone()} oninput={on_email} />
                    </label>
                    <label>
                        {"Telefone"}
                        <input type="tel" value={form.phone.clone()} oninput={on_phone} />
                    </label>
                    <label>
                        {"Assunto"}
                        <select onchange={on_subject}>
                            <option value="" selected={form.subject.is_empty()}>{"Selecione"}</option>
                            { for all_pages().into_iter().map(|page| html! {
                                <option
                                    key={page.slug}
                                    value={page.nav_label}
                                    selected={form.subject == page.nav_label}
                                >
                                    {page.nav_label}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label>
                        {"Mensagem"}
                        <textarea rows="5" value={form.message.clone()} oninput={on_message}></textarea>
                    </label>
                    <button type="submit" class="contact-submit">{"Enviar mensagem"}</button>
                    {
                        if *notice {
                            html! { <p class="contact-notice">{"Mensagem registrada! Nossa recepção retornará em breve."}</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>
                <div class="contact-direct reveal">
                    <p>{"Prefere falar agora?"}</p>
                    <a class="whatsapp-link" href={whatsapp} target="_blank" rel="noopener noreferrer">
                        {"Chamar no WhatsApp"}
                    </a>
                    <a class="phone-link" href={config::PHONE_LINK}>{config::PHONE}</a>
                    <a class="email-link" href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_fields() {
        let message = ContactMessage {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "11 99999-0000".into(),
            subject: "Psicologia".into(),
            message: "Gostaria de agendar.".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&message).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["subject"], "Psicologia");
        assert_eq!(json["message"], "Gostaria de agendar.");
    }

    #[test]
    fn whatsapp_text_needs_a_subject() {
        assert_eq!(ContactMessage::default().whatsapp_text(), None);
        let message = ContactMessage { subject: "Fonoaudiologia".into(), ..Default::default() };
        assert_eq!(
            message.whatsapp_text().as_deref(),
            Some("Olá! Gostaria de saber mais sobre Fonoaudiologia.")
        );
    }

    #[test]
    fn whatsapp_text_includes_name() {
        let message = ContactMessage {
            name: " Ana ".into(),
            subject: "Programa Nutrir".into(),
            ..Default::default()
        };
        assert_eq!(
            message.whatsapp_text().as_deref(),
            Some("Olá! Sou Ana e gostaria de saber mais sobre Programa Nutrir.")
        );
    }
}
