use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "fonoaudiologia",
    route: Route::Speech,
    nav_label: "Fonoaudiologia",
    accent: "#e76f51",
    hero_kicker: "Fonoaudiologia Vivace",
    hero_title: "Comunicar é",
    hero_words: &["brincar", "conectar", "pertencer"],
    hero_text: "Avaliação e terapia para bebês, crianças, adolescentes e adultos, com foco em linguagem, fala, voz, audição e alimentação.",
    hero_image: "/assets/fono-hero.webp",
    panels_heading: "Áreas de atuação",
    panels_intro: "Escolha uma área. Um segundo toque abre o agendamento pelo WhatsApp.",
    panels: &[
        PanelDescriptor {
            id: "linguagem",
            icon: "🧸",
            title: "Linguagem infantil",
            subtitle: "Do balbucio às primeiras frases",
            body: "Intervenção precoce para atrasos de linguagem, com sessões lúdicas e orientação para que a estimulação continue em casa.",
            features: &[
                Feature { id: "precoce", title: "Estimulação precoce", description: "Bebês a partir de 12 meses.", tone: Tone::Sun },
                Feature { id: "tea", title: "Comunicação no TEA", description: "Modelos naturalísticos e desenvolvimentais.", tone: Tone::Lilac },
                Feature { id: "pais", title: "Coaching parental", description: "Estratégias para o dia a dia da família.", tone: Tone::Teal },
            ],
            stats: &[
                Stat { value: "18", label: "meses de idade média na primeira avaliação" },
                Stat { value: "92%", label: "das famílias relatam evolução em 6 meses" },
            ],
            cta: "Agendar avaliação de linguagem",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20agendar%20avalia%C3%A7%C3%A3o%20de%20linguagem"),
        },
        PanelDescriptor {
            id: "fala",
            icon: "🔤",
            title: "Fala e motricidade orofacial",
            subtitle: "Trocas de sons, respiração oral e frênulo",
            body: "Avaliação miofuncional completa e terapia para alterações de fala, mastigação e deglutição.",
            features: &[
                Feature { id: "fonologia", title: "Desvios fonológicos", description: "Terapia baseada em pares mínimos e ciclos.", tone: Tone::Coral },
                Feature { id: "frenulo", title: "Avaliação do frênulo", description: "Protocolo padronizado e encaminhamento quando necessário.", tone: Tone::Sky },
            ],
            stats: &[],
            cta: "Agendar avaliação de fala",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20agendar%20avalia%C3%A7%C3%A3o%20de%20fala"),
        },
        PanelDescriptor {
            id: "voz",
            icon: "🎙️",
            title: "Voz",
            subtitle: "Profissionais da voz e reabilitação",
            body: "Aperfeiçoamento vocal para professores, cantores e comunicadores, e reabilitação de disfonias.",
            features: &[
                Feature { id: "higiene", title: "Higiene vocal", description: "Hábitos e aquecimento para quem usa a voz o dia todo.", tone: Tone::Teal },
                Feature { id: "disfonia", title: "Reabilitação de disfonias", description: "Trabalho integrado com otorrinolaringologia.", tone: Tone::Coral },
            ],
            stats: &[],
            cta: "Agendar avaliação vocal",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20agendar%20avalia%C3%A7%C3%A3o%20vocal"),
        },
    ],
    repeat: RepeatPolicy::Navigate,
    team_heading: "Equipe de fonoaudiologia",
    team: &[
        TeamMember {
            name: "Juliana Kato",
            role: "Fonoaudióloga coordenadora",
            registry: "CRFa 2-17654",
            bio: "Especialista em linguagem e comunicação alternativa.",
            photo: "/assets/equipe/juliana.webp",
        },
        TeamMember {
            name: "Pedro Lins",
            role: "Fonoaudiólogo",
            registry: "CRFa 2-20931",
            bio: "Atende motricidade orofacial e voz profissional.",
            photo: "/assets/equipe/pedro.webp",
        },
    ],
    closing_title: "Primeira avaliação",
    closing_text: "A avaliação inicial dura duas sessões e termina com uma devolutiva escrita para a família.",
};
