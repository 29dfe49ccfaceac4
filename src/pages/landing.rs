use log::{debug, info};
use yew::prelude::*;

use crate::components::analytics_tracker::AnalyticsTracker;
use crate::components::animated_section::{AnimatedSection, Animation};
use crate::components::faq::FaqAccordion;
use crate::components::gradient_button::{ButtonSize, ButtonVariant};
use crate::components::micro_interaction::{Effect, MicroInteraction};
use crate::components::network_status::NetworkStatus;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::smart_form::SmartForm;
use crate::components::testimonials::TestimonialsCarousel;
use crate::components::timeline::InteractiveTimeline;
use crate::components::whatsapp_button::{Placement, WhatsAppButton};
use crate::config;
use crate::platform::{classify_swipe, HapticIntensity, SwipeDirection};
use crate::services::use_services;

const SYMPTOMS: [&str; 7] = [
    "Suas pernas doem e incham, especialmente no final do dia",
    "Você tem facilidade para fazer hematomas nas pernas",
    "A gordura das suas pernas tem textura diferente (nodular/irregular)",
    "Dietas e exercícios não reduzem o volume das pernas",
    "Há desproporção entre a parte superior e inferior do corpo",
    "Você sente suas pernas pesadas e cansadas constantemente",
    "Médicos dizem que é 'só gordura' ou 'falta de exercício'",
];

const RISKS: [&str; 5] = [
    "Aumento progressivo do volume e da dor",
    "Limitação severa de mobilidade",
    "Impacto emocional e isolamento social",
    "Desenvolvimento de linfedema secundário",
    "Necessidade de procedimentos mais invasivos",
];

const DIFFERENTIALS: [(&str, &str); 3] = [
    (
        "Equipe Multidisciplinar Completa",
        "Médicos especializados em lipedema, fisioterapeutas com formação em DLM, nutricionistas especializadas e psicólogas com experiência em dor crônica.",
    ),
    (
        "Protocolo Integrado Exclusivo",
        "Diagnóstico preciso com ultrassom, plano de tratamento personalizado, acompanhamento contínuo e grupos de apoio.",
    ),
    (
        "Tecnologias Avançadas",
        "Drenagem linfática manual especializada, terapia de compressão adequada, tratamentos complementares e monitoramento de evolução.",
    ),
];

const BENEFITS: [&str; 8] = [
    "Alívio significativo das dores em até 30 dias",
    "Redução do inchaço e sensação de peso",
    "Melhora na mobilidade e qualidade de vida",
    "Autoestima recuperada",
    "Controle da progressão da doença",
    "Suporte emocional especializado",
    "Rede de apoio com outras pacientes",
    "Plano alimentar anti-inflamatório personalizado",
];

fn scroll_page(to_bottom: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let top = if to_bottom {
        window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0)
    } else {
        0.0
    };
    window.scroll_to_with_x_and_y(0.0, top);
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let services = use_services();
    let touch_start = use_mut_ref(|| None::<(f64, f64)>);

    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e
                .changed_touches()
                .get(0)
                .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())));
        })
    };
    // A vertical swipe across the page jumps to the top or the bottom.
    let ontouchend = Callback::from(move |e: TouchEvent| {
        let Some((x0, y0)) = touch_start.borrow_mut().take() else {
            return;
        };
        let Some(end) = e.changed_touches().get(0) else {
            return;
        };
        let swipe = classify_swipe(f64::from(end.client_x()) - x0, f64::from(end.client_y()) - y0);
        let to_bottom = match swipe {
            Some(SwipeDirection::Up) => false,
            Some(SwipeDirection::Down) => true,
            _ => return,
        };
        debug!("page swipe {:?}", swipe);
        services.haptics.pulse(HapticIntensity::Medium);
        scroll_page(to_bottom);
    });

    html! {
        <>
            <AnalyticsTracker />
            <NetworkStatus />
            <ScrollProgress />
            <div id="main-content" class="landing" {ontouchstart} {ontouchend}>
                <section id="hero" class="hero section-padding">
                    <div class="hero-content">
                        <h1>
                            {"Você sofre com dores e "}
                            <span class="text-gradient">{"inchaços nas pernas"}</span>
                            {" há anos?"}
                        </h1>
                        <p class="hero-subtitle">
                            {"Pode ser "}<strong>{"LIPEDEMA"}</strong>
                            {" - uma condição que afeta 11% das mulheres e é frequentemente confundida com obesidade"}
                        </p>
                        <MicroInteraction effect={Effect::Elastic}>
                            <WhatsAppButton location="hero" size={ButtonSize::Large} />
                        </MicroInteraction>
                        <p class="hero-badge">{"Clínica especializada em Lipedema"}</p>
                    </div>
                    <img
                        class="hero-image"
                        src="https://res.cloudinary.com/dkobjk4qi/image/upload/v1755459488/DSC03885_qsgeyv.jpg"
                        alt="Integra Lipecare - Equipe Especializada em Lipedema"
                        loading="eager"
                    />
                </section>

                <section class="info-bar">
                    <div class="info-item">
                        <strong>{"Equipe Multidisciplinar"}</strong>
                        <span>{"Médicos, fisioterapeutas, nutricionistas e psicólogas"}</span>
                    </div>
                    <div class="info-item">
                        <strong>{"Especialista em Lipedema"}</strong>
                        <span>{"Protocolo exclusivo e personalizado"}</span>
                    </div>
                    <div class="info-item">
                        <strong>{"Atendimento Humanizado"}</strong>
                        <span>{"Cuidado integral e acolhimento"}</span>
                    </div>
                </section>

                <AnimatedSection id="problema" animation={Animation::Stagger} delay_ms={100} class={classes!("section-padding")}>
                    <h2>{"Você se identifica com estes sintomas?"}</h2>
                    <div class="card-grid">
                        { for SYMPTOMS.iter().map(|&symptom| html! {
                            <div key={symptom} class="benefit-card">
                                <span class="check">{"✓"}</span>
                                <span>{symptom}</span>
                            </div>
                        }) }
                    </div>
                    <MicroInteraction effect={Effect::Ripple}>
                        <WhatsAppButton location="problema">{"Quero falar com especialistas"}</WhatsAppButton>
                    </MicroInteraction>
                </AnimatedSection>

                <section id="alerta" class="section-padding warning">
                    <span class="eyebrow">{"Alerta Importante"}</span>
                    <h2>{"O lipedema não tratado pode piorar progressivamente"}</h2>
                    <p>
                        {"Sem o diagnóstico e tratamento adequados, o lipedema pode evoluir através de seus 4 estágios, causando:"}
                    </p>
                    <ul class="risk-list">
                        { for RISKS.iter().map(|&risk| html! { <li key={risk}>{risk}</li> }) }
                    </ul>
                    <div class="warning-card">
                        <h3>{"Tempo é Essencial"}</h3>
                        <p>{"Cada dia sem tratamento é um dia a mais de sofrimento desnecessário."}</p>
                    </div>
                    <p class="hope">{"Mas existe esperança e tratamento eficaz disponível"}</p>
                </section>

                <AnimatedSection id="solucao" animation={Animation::SlideRight} delay_ms={200} class={classes!("section-padding")}>
                    <span class="eyebrow">{"Nossa Solução"}</span>
                    <h2>{"Tratamento integrado e humanizado"}</h2>
                    <p>
                        {"A primeira clínica de Sorocaba criada "}<strong>{"POR pacientes PARA pacientes"}</strong>
                    </p>
                    <div class="card-grid">
                        { for DIFFERENTIALS.iter().map(|&(title, description)| html! {
                            <div key={title} class="differential-card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }) }
                    </div>
                    <div class="cta-panel">
                        <h3>{"Pronta para transformar sua vida?"}</h3>
                        <p>{"Nossa avaliação gratuita inclui diagnóstico completo e plano de tratamento personalizado"}</p>
                        <MicroInteraction effect={Effect::Elastic}>
                            <WhatsAppButton location="solucao" />
                        </MicroInteraction>
                        <p class="trust">{"Sem compromisso • Atendimento humanizado • Especialistas dedicadas"}</p>
                    </div>
                </AnimatedSection>

                <AnimatedSection id="tratamento" delay_ms={200} class={classes!("section-padding")}>
                    <span class="eyebrow">{"Processo de Tratamento"}</span>
                    <h2>{"Como funciona o seu tratamento"}</h2>
                    <p>{"Conheça cada etapa do processo que vai transformar sua vida"}</p>
                    <InteractiveTimeline />
                </AnimatedSection>

                <section id="equipe" class="section-padding team">
                    <h2>{"Conheça as Especialistas que Vão Transformar sua Vida"}</h2>
                    <div class="card-grid">
                        <div class="doctor-card">
                            <h3>{"Dra. Daniela Persinotti"}</h3>
                            <p class="crm">{"CRM 99148"}</p>
                            <p>{"Especialista em Saúde Feminina e Metabolismo"}</p>
                            <blockquote>
                                {"\"Cada mulher é única. Trato o lipedema considerando hormônios, metabolismo e história de vida para criar um protocolo verdadeiramente personalizado.\""}
                            </blockquote>
                        </div>
                        <div class="doctor-card">
                            <h3>{"Dra. Fernanda T. Sales Antila"}</h3>
                            <p class="crm">{"CRM 169587 / RQE 83864"}</p>
                            <p>{"Cirurgiã Vascular pela UNICAMP"}</p>
                            <blockquote>
                                {"\"Com minha formação vascular especializada, identifico e trato alterações circulatórias do lipedema que outros profissionais podem não perceber.\""}
                            </blockquote>
                        </div>
                    </div>
                    <WhatsAppButton location="equipe">{"Quero ser atendida por estas especialistas"}</WhatsAppButton>
                </section>

                <section id="beneficios" class="section-padding">
                    <h2>{"O que você vai conquistar com nosso tratamento"}</h2>
                    <div class="card-grid">
                        { for BENEFITS.iter().map(|&benefit| html! {
                            <div key={benefit} class="benefit-card"><p>{benefit}</p></div>
                        }) }
                    </div>
                    <WhatsAppButton location="beneficios" variant={ButtonVariant::Secondary} />
                </section>

                <AnimatedSection id="depoimentos" animation={Animation::SlideLeft} delay_ms={300} class={classes!("section-padding")}>
                    <h2>{"Histórias de quem já passou por aqui"}</h2>
                    <TestimonialsCarousel />
                </AnimatedSection>

                <AnimatedSection id="formulario" animation={Animation::SlideRight} delay_ms={200} class={classes!("section-padding")}>
                    <span class="eyebrow">{"Avaliação Especializada"}</span>
                    <h2>{"Descubra se você tem lipedema"}</h2>
                    <p>{"Responda algumas perguntas e receba uma avaliação personalizada da nossa equipe"}</p>
                    <SmartForm />
                </AnimatedSection>

                <AnimatedSection id="faq" delay_ms={100} class={classes!("section-padding")}>
                    <h2>{"Perguntas Frequentes"}</h2>
                    <p>{"Esclarecemos as principais dúvidas sobre lipedema e nossos tratamentos"}</p>
                    <FaqAccordion />
                    <WhatsAppButton location="faq" variant={ButtonVariant::Accent}>{"Tenho outras dúvidas"}</WhatsAppButton>
                </AnimatedSection>

                <section id="localizacao" class="section-padding location">
                    <h2>{"Fácil acesso em Sorocaba"}</h2>
                    <div class="location-grid">
                        <div class="contact-card">
                            <h3>{"Integra Lipecare - Iguatemi Business"}</h3>
                            <p><strong>{"Endereço: "}</strong>{config::CLINIC_ADDRESS}</p>
                            <p><strong>{"WhatsApp: "}</strong>{config::CLINIC_PHONE_DISPLAY}</p>
                            <p><strong>{"Email: "}</strong>{config::CLINIC_EMAIL}</p>
                            <p><strong>{"Instagram: "}</strong>{config::CLINIC_INSTAGRAM}</p>
                            <WhatsAppButton location="localizacao">{"Como chegar até a clínica"}</WhatsAppButton>
                        </div>
                        <iframe
                            class="map"
                            src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3657.9023121073!2d-47.46444579999999!3d-23.536015699999997!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94c58a65fcb4e499%3A0x97dd13700a6c9e23!2sIguatemi%20Business%20Esplanada!5e0!3m2!1spt-BR!2sbr!4v1755618105980!5m2!1spt-BR!2sbr"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Localização da Integra Lipecare"
                        />
                    </div>
                </section>

                <AnimatedSection id="cta-final" animation={Animation::Scale} delay_ms={300} class={classes!("section-padding", "final-cta")}>
                    <h2>{"Não espere mais para cuidar da sua saúde"}</h2>
                    <p>
                        {"Agende sua primeira consulta com 30% de desconto e comece sua jornada de transformação hoje mesmo"}
                    </p>
                    <MicroInteraction effect={Effect::Glow}>
                        <WhatsAppButton location="cta-final" variant={ButtonVariant::WhatsApp} size={ButtonSize::Large}>
                            {"Agendar minha consulta agora"}
                        </WhatsAppButton>
                    </MicroInteraction>
                    <p class="fine-print">{"Oferta válida até sexta-feira • Vagas limitadas"}</p>
                </AnimatedSection>

                <footer class="footer">
                    <div class="footer-columns">
                        <div>
                            <h3>{"Localização"}</h3>
                            <p>{config::CLINIC_ADDRESS}</p>
                        </div>
                        <div>
                            <h3>{"Contato"}</h3>
                            <p>{config::CLINIC_PHONE_DISPLAY}</p>
                            <p>{config::CLINIC_EMAIL}</p>
                            <p>{config::OPENING_HOURS}</p>
                        </div>
                        <div>
                            <h3>{"Siga-nos"}</h3>
                            <a href="https://instagram.com/integralipecare" target="_blank" rel="noopener noreferrer">
                                {config::CLINIC_INSTAGRAM}
                            </a>
                        </div>
                    </div>
                    <p class="copyright">
                        {format!("© 2024 {}. Todos os direitos reservados.", config::CLINIC_NAME)}
                    </p>
                </footer>
            </div>
            <WhatsAppButton location="fixed" placement={Placement::Floating} />
            <style>
                {r#"
                .landing { font-family: 'Inter', sans-serif; color: #1f2937; }
                .section-padding { padding: 5rem 1.5rem; max-width: 72rem; margin: 0 auto; }
                .hero { display: grid; gap: 3rem; align-items: center; }
                @media (min-width: 1024px) { .hero { grid-template-columns: 7fr 5fr; } }
                .hero h1 { font-size: clamp(2.25rem, 5vw, 4.5rem); font-weight: 700; line-height: 1.1; }
                .hero-image { width: 100%; border-radius: 1.5rem; object-fit: cover; }
                .text-gradient {
                    background: linear-gradient(90deg, #7c3aed, #ec4899);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .info-bar {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1.5rem;
                    padding: 3rem 1.5rem;
                    background: #7c3aed;
                    color: #fff;
                    text-align: center;
                }
                .info-item { display: flex; flex-direction: column; gap: 0.25rem; }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                    margin: 2rem 0;
                }
                .benefit-card, .differential-card, .doctor-card, .contact-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    background: #fff;
                }
                .eyebrow { font-size: 0.875rem; font-weight: 600; color: #7c3aed; text-transform: uppercase; }
                .warning { background: #fffbeb; }
                .location-grid { display: grid; gap: 2rem; }
                @media (min-width: 1024px) { .location-grid { grid-template-columns: 1fr 1fr; } }
                .map { width: 100%; min-height: 24rem; border: 0; border-radius: 1rem; }
                .final-cta { text-align: center; }
                .footer { padding: 3rem 1.5rem; background: #111827; color: #d1d5db; }
                .footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; }
                .micro-interaction { position: relative; display: inline-block; overflow: hidden; }
                .micro-elastic:active { transform: scale(0.95); transition: transform 0.15s; }
                .micro-ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.5);
                    pointer-events: none;
                    animation: ripple 0.6s ease-out forwards;
                }
                @keyframes ripple { to { transform: scale(8); opacity: 0; } }
                .reveal { transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
                .reveal-hidden { opacity: 0; }
                .reveal-offset-up { transform: translateY(2rem); }
                .reveal-offset-left { transform: translateX(2rem); }
                .reveal-offset-right { transform: translateX(-2rem); }
                .reveal-shrunk { transform: scale(0.95); }
                .reveal-shown { opacity: 1; transform: none; }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(1rem); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </>
    }
}
