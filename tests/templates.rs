#[cfg(test)]
mod tests {
    use ergomate::db::templates::{ReminderTemplate, Templates};
    use ergomate::libs::reminder::{Priority, ReminderKind};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TemplateTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TemplateTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TemplateTestContext { _temp_dir: temp_dir }
        }
    }

    fn eye_template(name: &str) -> ReminderTemplate {
        ReminderTemplate::new(
            name.to_string(),
            ReminderKind::Eye,
            "Eye exercise time".to_string(),
            "Apply the 20-20-20 rule".to_string(),
            Priority::Medium,
            1200,
            None,
        )
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_template_crud(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();

        // Create template
        templates.create(&eye_template("eye-rest")).unwrap();

        // Read template
        let fetched = templates.get("eye-rest").unwrap().unwrap();
        assert_eq!(fetched.name, "eye-rest");
        assert_eq!(fetched.kind, ReminderKind::Eye);
        assert_eq!(fetched.duration, 1200);
        assert!(fetched.interval.is_none());

        // Update template
        let mut updated = fetched;
        updated.title = "Updated eye rest".to_string();
        updated.interval = Some(20);
        templates.update(&updated).unwrap();

        // Verify update
        let verified = templates.get("eye-rest").unwrap().unwrap();
        assert_eq!(verified.title, "Updated eye rest");
        assert_eq!(verified.interval, Some(20));

        // Delete template
        templates.delete("eye-rest").unwrap();
        assert!(templates.get("eye-rest").unwrap().is_none());
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_duplicate_names_are_rejected(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();

        templates.create(&eye_template("eye-rest")).unwrap();
        assert!(templates.create(&eye_template("eye-rest")).is_err());
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_list_is_ordered_by_name(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();

        templates.create(&eye_template("zz-last")).unwrap();
        templates.create(&eye_template("aa-first")).unwrap();

        let all = templates.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "aa-first");
        assert_eq!(all[1].name, "zz-last");
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_update_missing_template_errors(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();
        assert!(templates.update(&eye_template("ghost")).is_err());
        assert!(templates.delete("ghost").is_err());
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_to_spec_carries_template_linkage(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();

        let mut template = eye_template("recurring-eye");
        template.interval = Some(20);
        templates.create(&template).unwrap();

        let stored = templates.get("recurring-eye").unwrap().unwrap();
        let spec = stored.to_spec();
        assert_eq!(spec.template.as_deref(), Some("recurring-eye"));
        assert_eq!(spec.interval, Some(20));
        assert_eq!(spec.duration, 1200);
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_exists(_ctx: &mut TemplateTestContext) {
        let mut templates = Templates::new().unwrap();
        assert!(!templates.exists("eye-rest").unwrap());
        templates.create(&eye_template("eye-rest")).unwrap();
        assert!(templates.exists("eye-rest").unwrap());
    }
}
