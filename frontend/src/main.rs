fn main() {
    lims_admin_frontend::start();
}
