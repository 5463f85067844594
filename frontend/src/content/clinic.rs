use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "clinica",
    route: Route::Home,
    nav_label: "Clínica",
    accent: "#2a9d8f",
    hero_kicker: "Clínica multidisciplinar em São Paulo",
    hero_title: "Cuidado que acolhe",
    hero_words: &["a fala", "a mente", "o movimento", "o aprender", "a convivência"],
    hero_text: "Fonoaudiologia, psicologia, terapia ocupacional e psicopedagogia sob o mesmo teto, com equipes que conversam entre si e planos construídos junto com cada família.",
    hero_image: "/assets/clinica-recepcao.webp",
    panels_heading: "Nossas frentes de cuidado",
    panels_intro: "Toque em uma frente para conhecer os detalhes. Toque de novo para ir à página do programa.",
    panels: &[
        PanelDescriptor {
            id: "terapias",
            icon: "🧩",
            title: "Terapias integradas",
            subtitle: "Terapia ocupacional e integração sensorial",
            body: "Atendimentos individuais e em dupla para crianças, adolescentes e adultos, com salas sensoriais equipadas e devolutivas mensais para a família e a escola.",
            features: &[
                Feature { id: "sensorial", title: "Integração sensorial", description: "Sala com balanços, tirolesa e circuitos para regulação e planejamento motor.", tone: Tone::Teal },
                Feature { id: "avd", title: "Atividades de vida diária", description: "Autonomia para vestir, alimentar-se e organizar a rotina.", tone: Tone::Sun },
                Feature { id: "escola", title: "Parceria com a escola", description: "Visitas e orientações para professores e auxiliares.", tone: Tone::Sky },
            ],
            stats: &[
                Stat { value: "12", label: "terapeutas ocupacionais" },
                Stat { value: "3", label: "salas sensoriais" },
            ],
            cta: "Conhecer a terapia ocupacional",
            target: NavTarget::Route(Route::Occupational),
        },
        PanelDescriptor {
            id: "fono",
            icon: "🗣️",
            title: "Fonoaudiologia",
            subtitle: "Linguagem, fala, voz e deglutição",
            body: "Da primeira palavra à reabilitação vocal, avaliamos e acompanhamos cada etapa da comunicação.",
            features: &[
                Feature { id: "linguagem", title: "Atraso de linguagem", description: "Estimulação precoce com participação ativa dos pais.", tone: Tone::Coral },
                Feature { id: "caa", title: "Comunicação alternativa", description: "Pranchas e aplicativos de comunicação aumentativa.", tone: Tone::Lilac },
            ],
            stats: &[],
            cta: "Ir para fonoaudiologia",
            target: NavTarget::Route(Route::Speech),
        },
        PanelDescriptor {
            id: "psicologia",
            icon: "💬",
            title: "Psicologia",
            subtitle: "Infantil, adolescente, adulto e casal",
            body: "Psicoterapia com abordagens baseadas em evidências e acolhimento para toda a família.",
            features: &[
                Feature { id: "tcc", title: "Terapia cognitivo-comportamental", description: "Protocolos estruturados para ansiedade, humor e comportamento.", tone: Tone::Sky },
                Feature { id: "orientacao", title: "Orientação parental", description: "Encontros para pais e cuidadores.", tone: Tone::Sun },
            ],
            stats: &[Stat { value: "+2.000", label: "famílias atendidas" }],
            cta: "Ir para psicologia",
            target: NavTarget::Route(Route::Psychology),
        },
        PanelDescriptor {
            id: "psicopedagogia",
            icon: "📚",
            title: "Psicopedagogia",
            subtitle: "Dificuldades e transtornos de aprendizagem",
            body: "Avaliação psicopedagógica e intervenção para leitura, escrita, matemática e funções executivas.",
            features: &[
                Feature { id: "leitura", title: "Leitura e escrita", description: "Consciência fonológica e estratégias de compreensão.", tone: Tone::Teal },
                Feature { id: "estudo", title: "Rotina de estudos", description: "Organização, planejamento e autonomia escolar.", tone: Tone::Coral },
            ],
            stats: &[],
            cta: "Ir para psicopedagogia",
            target: NavTarget::Route(Route::Psychopedagogy),
        },
        PanelDescriptor {
            id: "nutrir",
            icon: "🌱",
            title: "Programa Nutrir",
            subtitle: "Apoio a transtornos alimentares",
            body: "Equipe interdisciplinar com psicologia, nutrição e psiquiatria para anorexia, bulimia, compulsão e seletividade alimentar.",
            features: &[
                Feature { id: "equipe", title: "Equipe integrada", description: "Reuniões semanais de caso entre todos os profissionais.", tone: Tone::Lilac },
                Feature { id: "familia", title: "Grupo de famílias", description: "Encontros quinzenais de apoio e psicoeducação.", tone: Tone::Sun },
            ],
            stats: &[],
            cta: "Conhecer o Programa Nutrir",
            target: NavTarget::Route(Route::Nutrir),
        },
        PanelDescriptor {
            id: "instituto",
            icon: "🤝",
            title: "Instituto Incluir",
            subtitle: "Formação e inclusão escolar",
            body: "Cursos, supervisão e consultoria para escolas e profissionais que querem tornar a inclusão uma prática diária.",
            features: &[
                Feature { id: "cursos", title: "Cursos livres", description: "Turmas presenciais e online para educadores.", tone: Tone::Sky },
                Feature { id: "consultoria", title: "Consultoria escolar", description: "Diagnóstico institucional e plano de ação.", tone: Tone::Teal },
            ],
            stats: &[Stat { value: "40+", label: "escolas parceiras" }],
            cta: "Conhecer o Instituto",
            target: NavTarget::Route(Route::Institute),
        },
    ],
    repeat: RepeatPolicy::Navigate,
    team_heading: "Coordenação clínica",
    team: &[
        TeamMember {
            name: "Dra. Helena Prado",
            role: "Diretora clínica · Psicóloga",
            registry: "CRP 06/84512",
            bio: "Mestre em psicologia do desenvolvimento, coordena a integração entre as equipes desde a fundação da clínica.",
            photo: "/assets/equipe/helena.webp",
        },
        TeamMember {
            name: "Marcos Tavares",
            role: "Coordenador de terapia ocupacional",
            registry: "CREFITO 3/12345-TO",
            bio: "Especialista em integração sensorial de Ayres, supervisiona os atendimentos infantis.",
            photo: "/assets/equipe/marcos.webp",
        },
        TeamMember {
            name: "Juliana Kato",
            role: "Coordenadora de fonoaudiologia",
            registry: "CRFa 2-17654",
            bio: "Atua com linguagem infantil e comunicação alternativa há quinze anos.",
            photo: "/assets/equipe/juliana.webp",
        },
        TeamMember {
            name: "Renata Alves",
            role: "Psicopedagoga",
            registry: "ABPp 4412",
            bio: "Pedagoga e psicopedagoga clínica, responsável pelas avaliações de aprendizagem.",
            photo: "/assets/equipe/renata.webp",
        },
    ],
    closing_title: "Vamos conversar?",
    closing_text: "Agende uma primeira conversa sem compromisso. Nossa recepção ajuda a entender qual caminho faz mais sentido para você.",
};
