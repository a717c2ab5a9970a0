//! Create/edit employee form
//!
//! Form shape:
//!
//! ```text
//! fullName            [required, minlength 2, maxlength 20]
//! contactPreference   "email" | "phone"     [required, one of] -> observer on phone
//! emailGroup          {email, confirmEmail} [emails match]
//! phone               [required only while contactPreference == "phone"]
//! skills[]            {skillName, experienceInYears, proficiency} all required;
//!                     years are ASCII digits that fit a u32
//! ```
//!
//! Every value change revalidates the full tree and re-projects the
//! message slots.

use std::sync::{Arc, LazyLock};

use directory_client::EmployeeService;
use shared::{ContactPreference, Employee, EmployeeId, Skill};

use crate::error::{FormError, FormResult};
use crate::form::{
    ArrayControl, FieldControl, FormErrors, FormModel, GroupControl, GroupValidator, Observer,
    ValidationMessages, Validator, Visibility, project,
};
use crate::navigation::Navigator;
use crate::routing::Route;

pub const FULL_NAME: &str = "fullName";
pub const CONTACT_PREFERENCE: &str = "contactPreference";
pub const EMAIL_GROUP: &str = "emailGroup";
pub const EMAIL: &str = "emailGroup.email";
pub const CONFIRM_EMAIL: &str = "emailGroup.confirmEmail";
pub const PHONE: &str = "phone";
pub const SKILLS: &str = "skills";
pub const SKILL_NAME: &str = "skillName";
pub const EXPERIENCE_IN_YEARS: &str = "experienceInYears";
pub const PROFICIENCY: &str = "proficiency";

const FULL_NAME_MIN: usize = 2;
const FULL_NAME_MAX: usize = 20;

/// Message slots exposed to the template
const ERROR_SLOTS: [&str; 8] = [
    FULL_NAME,
    "email",
    "confirmEmail",
    EMAIL_GROUP,
    PHONE,
    SKILL_NAME,
    EXPERIENCE_IN_YEARS,
    PROFICIENCY,
];

static YEARS: LazyLock<Validator> =
    LazyLock::new(|| Validator::pattern("[0-9]+").expect("valid years pattern"));

/// Knobs for building the form
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// When set, `email` must belong to this domain
    pub email_domain: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

impl FormMode {
    /// A numeric `:id` selects edit mode; anything else falls back to create.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.and_then(|p| p.parse::<EmployeeId>().ok()) {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

fn phone_validators(preference: &str) -> Vec<Validator> {
    if preference == ContactPreference::Phone.as_str() {
        vec![Validator::Required]
    } else {
        Vec::new()
    }
}

/// Fresh form tree with one empty skill row
pub fn build_form(options: &FormOptions) -> FormModel {
    let mut email_validators = vec![Validator::Required];
    if let Some(domain) = &options.email_domain {
        email_validators.push(Validator::EmailDomain(domain.clone()));
    }

    FormModel::new(
        GroupControl::new()
            .with_control(
                FULL_NAME,
                FieldControl::new("").with_validators(vec![
                    Validator::Required,
                    Validator::MinLength(FULL_NAME_MIN),
                    Validator::MaxLength(FULL_NAME_MAX),
                ]),
            )
            .with_control(
                CONTACT_PREFERENCE,
                FieldControl::new(ContactPreference::default().as_str())
                    .with_validators(vec![
                        Validator::Required,
                        Validator::OneOf(vec![
                            ContactPreference::Email.as_str().to_string(),
                            ContactPreference::Phone.as_str().to_string(),
                        ]),
                    ])
                    .with_observer(Observer::new(PHONE, phone_validators)),
            )
            .with_control(
                EMAIL_GROUP,
                GroupControl::new()
                    .with_control("email", FieldControl::new("").with_validators(email_validators))
                    .with_control(
                        "confirmEmail",
                        FieldControl::new("").with_validators(vec![Validator::Required]),
                    )
                    .with_validator(GroupValidator::email_match("email", "confirmEmail")),
            )
            .with_control(PHONE, FieldControl::new(""))
            .with_control(SKILLS, ArrayControl::new(vec![skill_group()])),
    )
}

/// Empty skill row; all three fields required
pub fn skill_group() -> GroupControl {
    GroupControl::new()
        .with_control(SKILL_NAME, FieldControl::new("").with_validators(vec![Validator::Required]))
        .with_control(
            EXPERIENCE_IN_YEARS,
            FieldControl::new("").with_validators(vec![
                Validator::Required,
                YEARS.clone(),
                Validator::Max(u32::MAX.into()),
            ]),
        )
        .with_control(PROFICIENCY, FieldControl::new("").with_validators(vec![Validator::Required]))
}

fn skill_group_from(skill: &Skill) -> GroupControl {
    let mut group = skill_group();
    let values = [
        (SKILL_NAME, skill.skill_name.clone()),
        (EXPERIENCE_IN_YEARS, skill.experience_in_years.to_string()),
        (PROFICIENCY, skill.proficiency.clone()),
    ];
    for (name, value) in values {
        if let Some(field) = group.field_mut(name) {
            field.patch_value(value);
        }
    }
    group.validate();
    group
}

/// Display text per control and error code
pub fn validation_messages(options: &FormOptions) -> ValidationMessages {
    let messages = ValidationMessages::new()
        .with(FULL_NAME, "required", "Full Name is required")
        .with(FULL_NAME, "minlength", "Full Name must be greater than 2 characters.")
        .with(FULL_NAME, "maxlength", "Full Name must be less than 20 characters.")
        .with("email", "required", "Email is required")
        .with("confirmEmail", "required", "Confirm Email is required")
        .with(EMAIL_GROUP, "emailMismatch", "Email and Confirm Email do not match")
        .with(PHONE, "required", "Phone is required");

    match &options.email_domain {
        Some(domain) => messages.with("email", "emailDomain", format!("Email domain should be {}", domain)),
        None => messages,
    }
}

fn group_value<'a>(group: &'a GroupControl, index: usize, name: &str) -> FormResult<&'a str> {
    group
        .field(name)
        .map(FieldControl::value)
        .ok_or_else(|| FormError::UnknownControl(format!("{}.{}.{}", SKILLS, index, name)))
}

/// Controller behind `/create` and `/edit/:id`
pub struct EmployeeFormController {
    service: Arc<dyn EmployeeService>,
    navigator: Arc<dyn Navigator>,
    mode: FormMode,
    employee_id: Option<EmployeeId>,
    form: FormModel,
    messages: ValidationMessages,
    form_errors: FormErrors,
}

impl EmployeeFormController {
    pub fn new(
        service: Arc<dyn EmployeeService>,
        navigator: Arc<dyn Navigator>,
        options: &FormOptions,
    ) -> Self {
        Self {
            service,
            navigator,
            mode: FormMode::Create,
            employee_id: None,
            form: build_form(options),
            messages: validation_messages(options),
            form_errors: FormErrors::with_slots(ERROR_SLOTS),
        }
    }

    /// Route activation. Edit mode fetches the employee and fills the form.
    pub async fn activate(&mut self, id_param: Option<&str>) {
        self.mode = FormMode::from_param(id_param);
        match self.mode {
            FormMode::Edit(id) => {
                tracing::info!(id, "Editing employee");
                self.load(id).await;
            }
            FormMode::Create => {
                if let Some(param) = id_param {
                    tracing::debug!(param, "Non-numeric employee id, using create mode");
                }
                tracing::info!("Creating employee");
            }
        }
    }

    async fn load(&mut self, id: EmployeeId) {
        match self.service.get(id).await {
            Ok(employee) => {
                if let Err(e) = self.populate(&employee) {
                    tracing::error!(id, error = %e, "Failed to populate form");
                }
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to load employee");
            }
        }
    }

    /// Copy a fetched employee into the form.
    ///
    /// `confirmEmail` is seeded from `email`, and the skills array is rebuilt
    /// with one row per skill. Nothing is marked touched or dirty.
    pub fn populate(&mut self, employee: &Employee) -> FormResult<()> {
        self.employee_id = employee.id.or(match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        });

        self.form.patch_value(FULL_NAME, &employee.full_name)?;
        self.form
            .patch_value(CONTACT_PREFERENCE, employee.contact_preference.as_str())?;
        self.form.patch_value(EMAIL, &employee.email)?;
        self.form.patch_value(CONFIRM_EMAIL, &employee.email)?;
        self.form
            .patch_value(PHONE, employee.phone.as_deref().unwrap_or(""))?;
        self.form
            .array_mut(SKILLS)?
            .replace(employee.skills.iter().map(skill_group_from).collect());

        self.form.validate();
        self.refresh_messages();
        Ok(())
    }

    /// User typed into a field
    pub fn set_value(&mut self, path: &str, value: &str) -> FormResult<()> {
        self.form.set_value(path, value)?;
        self.refresh_messages();
        Ok(())
    }

    /// Field lost focus
    pub fn touch(&mut self, path: &str) -> FormResult<()> {
        self.form.touch(path)?;
        self.refresh_messages();
        Ok(())
    }

    /// Append an empty skill row
    pub fn add_skill(&mut self) -> FormResult<()> {
        self.form.array_mut(SKILLS)?.push(skill_group());
        self.form.validate();
        self.refresh_messages();
        Ok(())
    }

    /// Remove the skill row at `index` and mark the list as user-modified
    pub fn remove_skill(&mut self, index: usize) -> FormResult<()> {
        let skills = self.form.array_mut(SKILLS)?;
        let len = skills.len();
        skills
            .remove_at(index)
            .ok_or(FormError::SkillIndexOutOfRange { index, len })?;
        skills.mark_touched();
        skills.mark_dirty();

        self.form.validate();
        self.refresh_messages();
        Ok(())
    }

    fn refresh_messages(&mut self) {
        let visibility = Visibility {
            show_prefilled: self.mode.is_edit(),
        };
        project(self.form.root(), &self.messages, visibility, &mut self.form_errors);
        tracing::debug!(valid = self.form.is_valid(), "Form revalidated");
    }

    /// Flatten the form into an [`Employee`]
    pub fn to_employee(&self) -> FormResult<Employee> {
        let preference = self.form.value(CONTACT_PREFERENCE)?;
        let contact_preference =
            preference
                .parse::<ContactPreference>()
                .map_err(|_| FormError::InvalidValue {
                    path: CONTACT_PREFERENCE.to_string(),
                    value: preference.to_string(),
                })?;

        let phone = self.form.value(PHONE)?;
        let skills = self
            .form
            .array(SKILLS)?
            .iter()
            .enumerate()
            .map(|(index, group)| -> FormResult<Skill> {
                let years = group_value(group, index, EXPERIENCE_IN_YEARS)?;
                let experience_in_years = years.parse::<u32>().map_err(|_| FormError::InvalidValue {
                    path: format!("{}.{}.{}", SKILLS, index, EXPERIENCE_IN_YEARS),
                    value: years.to_string(),
                })?;
                Ok(Skill {
                    skill_name: group_value(group, index, SKILL_NAME)?.to_string(),
                    experience_in_years,
                    proficiency: group_value(group, index, PROFICIENCY)?.to_string(),
                })
            })
            .collect::<FormResult<Vec<_>>>()?;

        Ok(Employee {
            id: self.employee_id,
            full_name: self.form.value(FULL_NAME)?.to_string(),
            contact_preference,
            email: self.form.value(EMAIL)?.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            skills,
        })
    }

    /// Save the employee, then navigate to the list.
    ///
    /// Creates when no id is known, updates otherwise. Service failures are
    /// logged and returned; the form stays as it is.
    pub async fn submit(&mut self) -> FormResult<()> {
        if !self.form.is_valid() {
            tracing::warn!("Submit rejected: form is invalid");
            return Err(FormError::Invalid);
        }
        let employee = self.to_employee()?;

        match employee.id {
            Some(id) => {
                if let Err(e) = self.service.update(&employee).await {
                    tracing::error!(id, error = %e, "Failed to update employee");
                    return Err(e.into());
                }
                tracing::info!(id, "Employee saved");
            }
            None => match self.service.create(&employee).await {
                Ok(created) => {
                    tracing::info!(id = ?created.id, "Employee saved");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create employee");
                    return Err(e.into());
                }
            },
        }

        self.navigator.navigate(Route::List);
        Ok(())
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.employee_id
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    /// Message currently shown for the control named `name`
    pub fn error(&self, name: &str) -> &str {
        self.form_errors.get(name)
    }

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    pub fn skill_count(&self) -> usize {
        self.form.array(SKILLS).map(ArrayControl::len).unwrap_or(0)
    }
}
