use yew::prelude::*;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms & Conditions"}</h1>
            <section>
                <h2>{"1. The Evaluation"}</h2>
                <p>{"Evaluation accounts are simulated. Passing an evaluation grants access to a funded account under a separate trader agreement. Evaluation fees are refunded with the first payout from a funded account."}</p>
            </section>
            <section>
                <h2>{"2. Funded Accounts"}</h2>
                <p>{"Funded accounts remain the property of KIMI Capital. Profit splits are paid according to the program selected at checkout. Breaching a drawdown limit closes the account."}</p>
            </section>
            <section>
                <h2>{"3. Prohibited Conduct"}</h2>
                <p>{"Copy trading between evaluation accounts, latency arbitrage, and exploiting demo pricing errors void the evaluation without refund."}</p>
            </section>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <section>
                <h2>{"What We Store"}</h2>
                <p>{"This site stores a single flag in your browser's local storage recording whether you accepted or declined cookies. Nothing else is persisted and nothing is sent to a server from this page."}</p>
            </section>
            <section>
                <h2>{"Analytics"}</h2>
                <p>{"If you accept cookies, anonymous usage analytics may be enabled. Declining keeps the site fully functional."}</p>
            </section>
        </div>
    }
}
