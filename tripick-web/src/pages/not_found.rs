use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "페이지를 찾을 수 없습니다" }</h1>
            <p>{ "주소를 다시 확인해 주세요." }</p>
            <button type="button" onclick={go_home}>
                { "처음으로 돌아가기" }
            </button>
        </section>
    }
}
