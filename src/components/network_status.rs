use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::platform::{ConnectionWatch, NetworkInfo, NetworkSpeed};

const RESTORED_NOTICE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Offline,
    Restored,
    Slow,
}

/// What to tell the visitor when the connection goes from `prev` to `next`.
pub fn notice_for(prev: &NetworkInfo, next: &NetworkInfo) -> Option<Notice> {
    if prev.online != next.online {
        Some(if next.online { Notice::Restored } else { Notice::Offline })
    } else if next.online && next.speed == NetworkSpeed::Slow && prev.speed != NetworkSpeed::Slow {
        Some(Notice::Slow)
    } else {
        None
    }
}

/// Mirrors the connection state onto `<html>` so styles can drop heavy media.
fn publish(info: &NetworkInfo) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let attributes = [
        ("data-save-data", info.should_save_data().to_string()),
        ("data-connection-speed", info.speed.as_str().to_string()),
        ("data-connection-type", info.kind.as_str().to_string()),
    ];
    for (name, value) in attributes {
        if let Err(e) = root.set_attribute(name, &value) {
            warn!("could not set {}: {:?}", name, e);
        }
    }
}

#[function_component(NetworkStatus)]
pub fn network_status() -> Html {
    let info = use_mut_ref(NetworkInfo::current);
    let offline = use_state(|| !info.borrow().online);
    let notice = use_state(|| None::<Notice>);
    let dismiss = use_mut_ref(|| None::<Timeout>);

    {
        let info = info.clone();
        use_effect_with_deps(
            move |_| {
                publish(&info.borrow());
                || ()
            },
            (),
        );
    }

    let refresh = {
        let offline = offline.clone();
        let notice = notice.clone();
        move || {
            let next = NetworkInfo::current();
            let change = notice_for(&info.borrow(), &next);
            *info.borrow_mut() = next;
            publish(&next);
            offline.set(!next.online);

            match change {
                Some(Notice::Offline) => warn!("connection lost"),
                Some(Notice::Restored) => info!("connection restored"),
                Some(Notice::Slow) => warn!("slow connection detected"),
                None => return,
            }
            notice.set(change);
            let notice = notice.clone();
            *dismiss.borrow_mut() = Some(Timeout::new(RESTORED_NOTICE_MS, move || notice.set(None)));
        }
    };
    {
        let refresh = refresh.clone();
        use_event_with_window("online", move |_: Event| refresh());
    }
    {
        let refresh = refresh.clone();
        use_event_with_window("offline", move |_: Event| refresh());
    }
    // Effective type and save-data changes arrive on the connection object.
    use_effect_with_deps(
        move |_| {
            let watch = ConnectionWatch::start(refresh);
            move || drop(watch)
        },
        (),
    );

    html! {
        <>
            if *offline {
                <div class="network-banner network-offline" role="alert">
                    <strong>{"Sem conexão"}</strong>
                    <span>{"Verifique sua conexão com a internet"}</span>
                </div>
            }
            { match *notice {
                Some(Notice::Restored) => html! {
                    <div class="network-banner network-restored" role="status">
                        <strong>{"Conexão restaurada"}</strong>
                        <span>{"Você está online novamente"}</span>
                    </div>
                },
                Some(Notice::Slow) => html! {
                    <div class="network-banner network-slow" role="status">
                        <strong>{"Conexão lenta detectada"}</strong>
                        <span>{"Carregamento pode ser mais lento"}</span>
                    </div>
                },
                _ => html! {},
            } }
            <style>
                {r#"
                .network-banner {
                    position: fixed;
                    top: 0.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 70;
                    display: flex;
                    flex-direction: column;
                    padding: 0.75rem 1.25rem;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-size: 0.875rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
                }
                .network-offline { background: #dc2626; }
                .network-restored { background: #16a34a; }
                .network-slow { background: #d97706; }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online(speed: NetworkSpeed) -> NetworkInfo {
        NetworkInfo {
            speed,
            ..NetworkInfo::from_readings(true, Some("4g"), None, false)
        }
    }

    #[test]
    fn going_offline_and_back() {
        let up = online(NetworkSpeed::Fast);
        let down = NetworkInfo { online: false, ..up };
        assert_eq!(notice_for(&up, &down), Some(Notice::Offline));
        assert_eq!(notice_for(&down, &up), Some(Notice::Restored));
        assert_eq!(notice_for(&up, &up), None);
    }

    #[test]
    fn slow_connection_is_announced_once() {
        let fast = online(NetworkSpeed::Fast);
        let slow = online(NetworkSpeed::Slow);
        assert_eq!(notice_for(&fast, &slow), Some(Notice::Slow));
        assert_eq!(notice_for(&slow, &slow), None);
    }

    #[test]
    fn effective_type_change_alone_is_announced() {
        let before = NetworkInfo::from_readings(true, Some("4g"), None, false);
        let after = NetworkInfo::from_readings(true, Some("slow-2g"), None, false);
        assert_eq!(notice_for(&before, &after), Some(Notice::Slow));
        let recovered = NetworkInfo::from_readings(true, Some("3g"), None, false);
        assert_eq!(notice_for(&after, &recovered), None);
    }
}
