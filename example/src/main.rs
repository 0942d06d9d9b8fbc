fn main() -> Result<(), value_slider::SliderError> {
    value_slider_ui::init_tracing();
    example::run()
}
