mod job_form_test;
mod sidebar_test;
mod stats_card_test;
