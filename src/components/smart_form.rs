use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::error_fallback::PageFault;
use crate::components::micro_interaction::{Effect, MicroInteraction};
use crate::form::{Field, FormController, PreferredTime, Step, SubmitOutcome, Urgency, SYMPTOM_OPTIONS};
use crate::services::use_services;

type Shared = Rc<RefCell<FormController>>;

/// Callback that applies an intent to the controller and re-renders.
fn intent<E: 'static>(
    controller: &Shared,
    update: &Rc<dyn Fn()>,
    apply: impl Fn(&mut FormController, E) + 'static,
) -> Callback<E> {
    let controller = controller.clone();
    let update = update.clone();
    Callback::from(move |e: E| {
        apply(&mut controller.borrow_mut(), e);
        update();
    })
}

fn text_input(controller: &Shared, update: &Rc<dyn Fn()>, field: Field) -> Callback<InputEvent> {
    intent(controller, update, move |form, e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        form.edit_field(field, &value);
    })
}

fn field_error(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="form-error" role="alert">{"⚠ "}{message.to_string()}</p> },
        None => html! {},
    }
}

struct TextField {
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    max_length: Option<&'static str>,
}

static PERSONAL_FIELDS: [TextField; 4] = [
    TextField {
        field: Field::Name,
        label: "Nome Completo *",
        kind: "text",
        placeholder: "Seu nome completo",
        max_length: None,
    },
    TextField {
        field: Field::Age,
        label: "Idade *",
        kind: "number",
        placeholder: "Ex: 35",
        max_length: None,
    },
    TextField {
        field: Field::Email,
        label: "Email *",
        kind: "email",
        placeholder: "seu.email@exemplo.com",
        max_length: None,
    },
    TextField {
        field: Field::Phone,
        label: "Telefone/WhatsApp *",
        kind: "tel",
        placeholder: "(11) 99999-9999",
        max_length: Some("15"),
    },
];

fn personal_step(controller: &Shared, update: &Rc<dyn Fn()>) -> Html {
    let form = controller.borrow();
    let answers = form.answers();
    let inputs = PERSONAL_FIELDS.iter().map(|input| {
        let value = match input.field {
            Field::Name => answers.name.clone(),
            Field::Age => answers.age.clone(),
            Field::Email => answers.email.clone(),
            _ => answers.phone.clone(),
        };
        let error = form.errors().get(input.field);
        let id = format!("form-{}", input.field);
        html! {
            <div key={input.field.as_str()} class="form-field">
                <label for={id.clone()}>{input.label}</label>
                <input
                    {id}
                    type={input.kind}
                    value={value}
                    placeholder={input.placeholder}
                    maxlength={input.max_length}
                    class={classes!("form-input", error.is_some().then_some("form-input-invalid"))}
                    aria-invalid={error.is_some().to_string()}
                    oninput={text_input(controller, update, input.field)}
                />
                { field_error(error) }
            </div>
        }
    });
    html! { <div class="form-step form-step-personal">{ for inputs }</div> }
}

fn symptoms_step(controller: &Shared, update: &Rc<dyn Fn()>) -> Html {
    let form = controller.borrow();
    html! {
        <div class="form-step">
            <p class="form-legend">{"Quais sintomas você tem sentido? (Selecione todos que se aplicam) *"}</p>
            <div class="form-options">
                { for SYMPTOM_OPTIONS.iter().map(|&symptom| {
                    let checked = form.answers().has_symptom(symptom);
                    let onchange = intent(controller, update, move |form, _: Event| form.toggle_symptom(symptom));
                    html! {
                        <label key={symptom} class={classes!("form-option", checked.then_some("form-option-selected"))}>
                            <input type="checkbox" {checked} {onchange} />
                            <span>{symptom}</span>
                        </label>
                    }
                }) }
            </div>
            { field_error(form.errors().get(Field::Symptoms)) }
        </div>
    }
}

fn scheduling_step(controller: &Shared, update: &Rc<dyn Fn()>) -> Html {
    let form = controller.borrow();
    let answers = form.answers();
    let on_time = intent(controller, update, |form, e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        match value.parse::<PreferredTime>() {
            Ok(time) => form.set_preferred_time(time),
            // the "Selecione um horário" placeholder
            Err(_) => form.edit_field(Field::PreferredTime, ""),
        }
    });

    html! {
        <div class="form-step">
            <p class="form-legend">{"Qual a urgência do seu caso? *"}</p>
            <div class="form-options" role="radiogroup">
                { for Urgency::ALL.iter().map(|&urgency| {
                    let checked = answers.urgency == Some(urgency);
                    let onchange = intent(controller, update, move |form, _: Event| form.set_urgency(urgency));
                    html! {
                        <label
                            key={urgency.value()}
                            class={classes!(
                                "form-option",
                                checked.then(|| format!("form-option-{}", urgency.tone()))
                            )}
                        >
                            <input type="radio" name="urgency" value={urgency.value()} {checked} {onchange} />
                            <span>{urgency.label()}</span>
                        </label>
                    }
                }) }
            </div>
            { field_error(form.errors().get(Field::Urgency)) }

            <label for="form-preferred-time" class="form-legend">{"Melhor horário para contato *"}</label>
            <select
                id="form-preferred-time"
                class={classes!("form-input", form.errors().get(Field::PreferredTime).is_some().then_some("form-input-invalid"))}
                onchange={on_time}
            >
                <option value="" selected={answers.preferred_time.is_none()}>{"Selecione um horário"}</option>
                { for PreferredTime::ALL.iter().map(|&time| html! {
                    <option key={time.value()} value={time.value()} selected={answers.preferred_time == Some(time)}>
                        {time.label()}
                    </option>
                }) }
            </select>
            { field_error(form.errors().get(Field::PreferredTime)) }
        </div>
    }
}

fn submitted_view(fallback_url: Option<&str>) -> Html {
    html! {
        <div class="smart-form smart-form-done">
            <div class="smart-form-check">{"✓"}</div>
            <h3>{"Formulário Enviado!"}</h3>
            <p>
                {"Suas informações foram encaminhadas para o WhatsApp. Nossa equipe entrará em contato em breve."}
            </p>
            if let Some(url) = fallback_url {
                <div class="smart-form-fallback">
                    <p>{"Se o WhatsApp não abriu automaticamente, clique no link abaixo:"}</p>
                    <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{"Abrir WhatsApp"}</a>
                </div>
            }
            <div class="smart-form-eta">
                {"Tempo estimado de resposta: "}<strong>{"até 2 horas"}</strong>
            </div>
        </div>
    }
}

/// Three-step lead form. Finishing it opens a WhatsApp chat with the
/// answers filled in.
#[function_component(SmartForm)]
pub fn smart_form() -> Html {
    let services = use_services();
    let controller: Shared = {
        let reporter = services.analytics.clone();
        use_mut_ref(move || FormController::new(reporter))
    };
    let update = use_update();

    if controller.borrow().is_submitted() {
        return submitted_view(controller.borrow().fallback_url());
    }
    let Some(step) = controller.borrow().current_step() else {
        return html! {};
    };

    let on_previous = intent(&controller, &update, |form, _: MouseEvent| {
        form.previous();
    });
    let on_next = intent(&controller, &update, |form, _: MouseEvent| {
        if form.next() {
            debug!("form advanced to step {:?}", form.current_step());
        }
    });
    let on_submit = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            let result = controller.borrow_mut().submit(&*services.opener);
            update();
            match result {
                Ok(SubmitOutcome::Submitted { .. }) => info!("form submitted"),
                Ok(outcome) => debug!("submit: {:?}", outcome),
                Err(e) => services.report_fault.emit(PageFault::new(e.to_string())),
            }
        })
    };

    let body = match step {
        Step::Personal => personal_step(&controller, &update),
        Step::Symptoms => symptoms_step(&controller, &update),
        Step::Scheduling => scheduling_step(&controller, &update),
    };
    let submitting = controller.borrow().is_submitting();
    let progress = step.progress();

    html! {
        <div class="smart-form">
            <div class="smart-form-header">
                <h3>{"Primeira Consulta Especializada"}</h3>
                <p>{step.definition().description}</p>
            </div>

            <div class="smart-form-progress">
                <div class="smart-form-progress-labels">
                    <span>{format!("Etapa {} de {}", step.number(), Step::COUNT)}</span>
                    <span>{format!("{}% concluído", progress)}</span>
                </div>
                <div class="smart-form-progress-track">
                    <div class="smart-form-progress-bar" style={format!("width: {}%;", progress)} />
                </div>
            </div>

            <h4 class="smart-form-step-title">{step.definition().title}</h4>
            { body }

            <div class="smart-form-nav">
                <MicroInteraction effect={Effect::Elastic} disabled={step.previous().is_none()}>
                    <button class="smart-form-prev" disabled={step.previous().is_none()} onclick={on_previous}>
                        {"Anterior"}
                    </button>
                </MicroInteraction>
                <MicroInteraction effect={Effect::Ripple}>
                    if step.is_last() {
                        // Stays enabled with the synchronous browser opener; see
                        // `FormController::is_submitting`.
                        <button class="smart-form-next" disabled={submitting} onclick={on_submit}>
                            { if submitting { "Enviando..." } else { "Enviar Formulário" } }
                        </button>
                    } else {
                        <button class="smart-form-next" onclick={on_next}>{"Próximo"}</button>
                    }
                </MicroInteraction>
            </div>
        </div>
    }
}
