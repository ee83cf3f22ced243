//! Loan process page

use super::ViewContext;
use crate::content::{AgentIdentity, LoanProcessContent};
use crate::helpers::{html_escape, image_tag, link_to};

pub fn loan_process(ctx: &ViewContext, loan: &LoanProcessContent, agent: &AgentIdentity) -> String {
    format!(
        r#"<section class="section-facts">
<div class="left">
<h2>{facts_title}</h2>
<p>{description1}</p>
<p>{description2}</p>
{facts_button}
</div>
<div class="right">{headshot}</div>
<div class="counters">
<div class="counter"><span class="counter-label">{counter1}</span></div>
<div class="counter"><span class="odometer" data-max="{years}">{years}</span><span class="counter-label">{counter2}</span></div>
<div class="counter"><span class="counter-label">{counter3}</span></div>
</div>
</section>
<section class="section-process">
<h2>{process_title}</h2>
<p>{process_description}</p>
<p class="step">{step}</p>
</section>
<section class="section-calculator">
<h3>{calculator_title}</h3>
<p>{calculator_description}</p>
</section>
"#,
        facts_title = html_escape(&loan.facts_title),
        description1 = html_escape(&loan.facts_description1),
        description2 = html_escape(&loan.facts_description2),
        facts_button = link_to(ctx.config, "/", &loan.facts_button_text, Some("tf-btn")),
        headshot = image_tag(ctx.config, &agent.headshot_image_src, &agent.name, None),
        counter1 = html_escape(&loan.facts_counter1_label),
        years = loan.years_counter_value,
        counter2 = html_escape(&loan.facts_counter2_label),
        counter3 = html_escape(&loan.facts_counter3_label),
        process_title = html_escape(&loan.process_title),
        process_description = html_escape(&loan.process_description),
        step = html_escape(&loan.process_step_description),
        calculator_title = html_escape(&loan.calculator_title),
        calculator_description = html_escape(&loan.calculator_description),
    )
}
