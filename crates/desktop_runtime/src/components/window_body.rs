use super::*;
use crate::{
    generator::GeneratorPhase,
    model::{window_primary_input_dom_id, DocumentBlob, DocumentRef, WindowContent},
    runtime_context::submit_generation,
};
use platform_host::{
    AuthPrompt, CapabilityStatus, DocumentKind, GeneratedDocument, StructuredContent,
};

#[component]
pub(super) fn WindowBody(window_id: WindowId, content: WindowContent) -> impl IntoView {
    let input_id = window_primary_input_dom_id(&window_id);
    match content.kind {
        AppKind::DocumentGenerator => view! { <GeneratorPanel input_id=input_id /> }.into_view(),
        AppKind::Account => view! { <AccountPanel input_id=input_id /> }.into_view(),
        _ => view! { <DocumentView input_id=input_id document=content.document /> }.into_view(),
    }
}

#[component]
fn DocumentView(input_id: String, document: Option<DocumentRef>) -> impl IntoView {
    let Some(document) = document else {
        return view! {
            <p class="document-empty">"No document is open. Use the AI Generator to create one."</p>
        }
        .into_view();
    };

    let body = match document.blob {
        DocumentBlob::Empty => {
            view! { <p class="document-empty">"This file is empty."</p> }.into_view()
        }
        DocumentBlob::Text(text) => {
            view! { <TextEditor input_id=input_id initial=text /> }.into_view()
        }
        DocumentBlob::Generated(generated) => {
            view! { <GeneratedDocumentView document=generated /> }.into_view()
        }
    };

    view! {
        <article class="document-embed" data-file-id=document.file_id>
            <header class="document-embed-header">{document.file_name}</header>
            {body}
        </article>
    }
    .into_view()
}

#[component]
fn TextEditor(input_id: String, initial: String) -> impl IntoView {
    let text = create_rw_signal(initial);
    let word_count = move || text.with(|text| text.split_whitespace().count());

    view! {
        <textarea
            id=input_id
            class="document-editor"
            spellcheck="true"
            prop:value=move || text.get()
            on:input=move |ev| text.set(event_target_value(&ev))
        />
        <footer class="document-status">{move || format!("{} words", word_count())}</footer>
    }
}

#[component]
fn GeneratedDocumentView(document: GeneratedDocument) -> impl IntoView {
    let content = match document.content {
        StructuredContent::Pdf { sections } => view! {
            <div class="document-pages">
                {sections
                    .into_iter()
                    .map(|section| view! {
                        <section class="document-section">
                            <h2>{section.heading}</h2>
                            <p>{section.body}</p>
                        </section>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        StructuredContent::Ppt { slides } => view! {
            <ol class="slide-deck">
                {slides
                    .into_iter()
                    .map(|slide| view! {
                        <li class="slide">
                            <h2>{slide.title}</h2>
                            <ul>
                                {slide
                                    .bullets
                                    .into_iter()
                                    .map(|bullet| view! { <li>{bullet}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    })
                    .collect_view()}
            </ol>
        }
        .into_view(),
        StructuredContent::Sheet { columns, rows } => view! {
            <table class="sheet-grid">
                <thead>
                    <tr>
                        {columns.into_iter().map(|column| view! { <th>{column}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view(),
    };

    view! {
        <div class="generated-document">
            <h1>{document.title}</h1>
            {content}
        </div>
    }
}

#[component]
fn GeneratorPanel(input_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let generator = runtime.generator;
    let availability = runtime.host.get_value().capabilities().generation;

    // Leaving the window abandons any in-flight request.
    on_cleanup(move || {
        let _ = generator.try_update(|session| session.cancel());
    });

    let status = move || {
        generator.with(|session| match &session.phase {
            GeneratorPhase::Idle => ().into_view(),
            GeneratorPhase::Generating { .. } => view! {
                <p class="generator-status" role="status">
                    "Generating…"
                    <button on:click=move |_| generator.update(|session| session.cancel())>
                        "Cancel"
                    </button>
                </p>
            }
            .into_view(),
            GeneratorPhase::Ready { document, .. } => view! {
                <p class="generator-status" role="status">
                    {format!("Opened “{}”.", document.title)}
                </p>
            }
            .into_view(),
            GeneratorPhase::Failed { message, retryable } => {
                let retry_label = if *retryable { "Try again" } else { "Retry" };
                view! {
                    <p class="generator-error" role="alert">
                        {message.clone()}
                        <button on:click=move |_| submit_generation(runtime)>{retry_label}</button>
                    </p>
                }
                .into_view()
            }
        })
    };

    view! {
        <form
            class="generator-panel"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_generation(runtime);
            }
        >
            <Show when=move || availability != CapabilityStatus::Available>
                <p class="generator-notice">
                    "AI generation is not configured on this host; requests will report the problem."
                </p>
            </Show>
            <fieldset class="generator-kinds">
                <legend>"Document type"</legend>
                {DocumentKind::ALL
                    .into_iter()
                    .map(|kind| view! {
                        <label>
                            <input
                                type="radio"
                                name="generator-kind"
                                prop:checked=move || generator.with(|session| session.kind == kind)
                                on:change=move |_| generator.update(|session| session.kind = kind)
                            />
                            {kind.label()}
                        </label>
                    })
                    .collect_view()}
            </fieldset>
            <textarea
                id=input_id
                class="generator-prompt"
                placeholder="Describe the document you want"
                prop:value=move || generator.with(|session| session.prompt.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    generator.update(|session| session.prompt = value);
                }
            />
            <button type="submit" disabled=move || !generator.with(|session| session.can_submit())>
                "Generate"
            </button>
            {status}
        </form>
    }
}

#[component]
fn AccountPanel(input_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = runtime.host;
    let user = create_rw_signal(host.get_value().current_user());
    let notice = create_rw_signal(None::<&'static str>);

    let prompt = move |kind: AuthPrompt| {
        let opened = host.get_value().open_auth_prompt(kind);
        notice.set((!opened).then_some("Sign-in is not available yet. Try again in a moment."));
    };
    let refresh = move |_| {
        notice.set(None);
        user.set(host.get_value().current_user());
    };
    let sign_out = move |_| {
        host.get_value().sign_out(move || {
            let _ = user.try_set(None);
        })
    };

    view! {
        <div class="account-panel">
            <Show
                when=move || user.with(Option::is_some)
                fallback=move || {
                    view! {
                        <p>"You are not signed in."</p>
                        <div class="account-actions">
                            <button id=input_id.clone() on:click=move |_| prompt(AuthPrompt::SignIn)>
                                "Sign in"
                            </button>
                            <button on:click=move |_| prompt(AuthPrompt::SignUp)>"Sign up"</button>
                            <button on:click=refresh>"Refresh"</button>
                        </div>
                        {move || notice.get().map(|text| view! { <p class="account-notice" role="status">{text}</p> })}
                    }
                }
            >
                {move || {
                    user.get()
                        .map(|user| {
                            view! {
                                <p class="account-name">{user.display_name}</p>
                                <p class="account-email">{user.email.unwrap_or_default()}</p>
                            }
                        })
                }}
                <button on:click=sign_out>"Sign out"</button>
            </Show>
        </div>
    }
}
