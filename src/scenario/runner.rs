//! Scenario runner
//!
//! Drives the fixed seeding choreography against the membership app: log
//! in, register the client, create the back-dated membership, capture the
//! screenshot. The first phase failure aborts the rest, but the browser
//! session is closed on every exit path.

use std::time::Instant;

use url::Url;

use crate::browser::Driver;
use crate::core::{Config, Result, RunReport, Step, StepOutcome};
use crate::scenario::{dates, pages};

/// Drives one seeding run through a [`Driver`]
pub struct ScenarioRunner<D: Driver> {
    /// Configuration for the run
    config: Config,
    /// Browser the scenario talks through
    driver: D,
}

impl<D: Driver> ScenarioRunner<D> {
    /// Create a runner for one seeding run
    pub fn new(config: Config, driver: D) -> Self {
        Self { config, driver }
    }

    /// The phases this run will execute, in order
    pub fn plan(&self) -> Vec<Step> {
        let mut plan = vec![Step::Login, Step::RegisterClient, Step::CreateMembership];

        if self.config.runner.verify {
            plan.push(Step::Verify);
        }

        plan.push(Step::Screenshot);
        plan
    }

    /// Run the scenario to completion
    ///
    /// The session is closed whether the phases succeeded or not; a phase
    /// failure still surfaces first.
    pub async fn run(self) -> Result<RunReport> {
        self.config.validate()?;

        let started = Instant::now();
        let mut steps = Vec::new();

        let driven = self.drive(&mut steps).await;
        let closed = self.driver.close().await;

        driven?;
        closed?;

        Ok(RunReport {
            steps,
            artifact: self.config.artifact.screenshot_path,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Execute the planned phases in order, stopping on the first failure
    async fn drive(&self, steps: &mut Vec<StepOutcome>) -> Result<()> {
        let base = self.config.app.base()?;
        let plan = self.plan();
        let total = plan.len();

        for (i, &step) in plan.iter().enumerate() {
            println!("[{}/{}] {}...", i + 1, total, self.describe(step));
            let phase_started = Instant::now();

            let result = match step {
                Step::Login => self.login(&base).await,
                Step::RegisterClient => self.register_client(&base).await,
                Step::CreateMembership => self.create_membership().await,
                Step::Verify => self.verify().await,
                Step::Screenshot => self.screenshot().await,
            };

            result.map_err(|e| e.at_step(step))?;
            steps.push(StepOutcome::new(
                step,
                phase_started.elapsed().as_millis() as u64,
            ));
        }

        Ok(())
    }

    /// One progress line per phase
    fn describe(&self, step: Step) -> String {
        match step {
            Step::Login => format!("Logging in as {}", self.config.app.username),
            Step::RegisterClient => {
                format!("Registering client '{}'", self.config.seed.full_name)
            }
            Step::CreateMembership => format!(
                "Creating a {} membership started {} days ago",
                self.config.seed.membership_type, self.config.seed.start_offset_days
            ),
            Step::Verify => format!("Waiting for '{}' to show up", self.config.seed.full_name),
            Step::Screenshot => format!(
                "Capturing screenshot to {}",
                self.config.artifact.screenshot_path.display()
            ),
        }
    }

    /// Authenticate and wait for the post-login redirect
    async fn login(&self, base: &Url) -> Result<()> {
        let login_url = pages::page_url(base, pages::LOGIN_PATH)?;
        let home_url = pages::page_url(base, pages::HOME_PATH)?;

        self.driver.goto(login_url.as_str()).await?;
        self.driver
            .fill_by_label(pages::USERNAME_LABEL, &self.config.app.username)
            .await?;
        self.driver
            .fill_by_label(pages::PASSWORD_LABEL, &self.config.app.password)
            .await?;
        self.driver.click_button(pages::LOGIN_BUTTON).await?;
        self.driver.wait_for_url(home_url.as_str()).await?;

        Ok(())
    }

    /// Create the client record and accept its confirmation dialog
    async fn register_client(&self, base: &Url) -> Result<()> {
        let create_url = pages::page_url(base, pages::CREATE_MEMBERSHIP_PATH)?;
        let seed = &self.config.seed;

        self.driver.goto(create_url.as_str()).await?;
        self.driver
            .fill_by_label(pages::FULL_NAME_LABEL, &seed.full_name)
            .await?;
        self.driver
            .fill_by_label(pages::PHONE_LABEL, &seed.phone)
            .await?;
        self.driver
            .fill_by_label(pages::EMAIL_LABEL, &seed.email)
            .await?;
        self.driver
            .click_button(pages::REGISTER_CLIENT_BUTTON)
            .await?;
        self.driver.click_button(pages::CONFIRM_BUTTON).await?;

        Ok(())
    }

    /// Fill the membership form and accept its confirmation dialog
    ///
    /// The client select fills in asynchronously after registration, so the
    /// phase starts by waiting for it. The fresh client arrives preselected;
    /// only the type and payment selects need choosing.
    async fn create_membership(&self) -> Result<()> {
        let seed = &self.config.seed;
        let start_date = dates::start_date_string(seed.start_offset_days)?;

        if self.config.runner.debug {
            eprintln!("DEBUG: Computed start date: {}", start_date);
        }

        self.driver.wait_for(pages::CLIENT_SELECT).await?;
        self.driver
            .select(pages::MEMBERSHIP_TYPE_SELECT, &seed.membership_type)
            .await?;
        self.driver
            .fill(pages::START_DATE_INPUT, &start_date)
            .await?;
        self.driver
            .select_by_label(pages::PAYMENT_METHOD_LABEL, &seed.payment_method)
            .await?;
        self.driver
            .click_button(pages::CREATE_MEMBERSHIP_BUTTON)
            .await?;
        self.driver.click_button(pages::CONFIRM_BUTTON).await?;

        Ok(())
    }

    /// Wait until the seeded client's name is visible on the page
    async fn verify(&self) -> Result<()> {
        self.driver
            .wait_for_text(&self.config.seed.full_name)
            .await
    }

    /// Capture the success artifact, creating parent directories first
    async fn screenshot(&self) -> Result<()> {
        let path = &self.config.artifact.screenshot_path;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        self.driver
            .screenshot(path, self.config.artifact.full_page)
            .await
    }
}
